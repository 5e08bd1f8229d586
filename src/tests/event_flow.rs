#[cfg(test)]
mod tests {
    use crate::api::bus::BusClient;
    use crate::api::members::MembersClient;
    use crate::auth::M2mAuth;
    use crate::helpers::time::sleep;
    use crate::kafka::options::kafka_options;
    use crate::tests::common::{build_reqwest_client, test_app_config};
    use anyhow::Result;
    use httpmock::Method::{GET, POST};
    use httpmock::MockServer;
    use serde_json::json;

    /// Token fetch, member lookup and event publish against mock
    /// upstreams, wired the way a processor uses this crate.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_member_event_flow() -> Result<()> {
        // -------------------------------
        // 1. Mock upstreams
        // -------------------------------
        let auth0 = MockServer::start_async().await;
        let api = MockServer::start_async().await;

        let token_mock = auth0.mock(|when, then| {
            when.method(POST)
                .path("/oauth/token")
                .body_includes("grant_type=client_credentials")
                .body_includes("audience=https%3A%2F%2Ftopcoder.example.com");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "access_token": "m2m-topcoder-123",
                    "expires_in": 86400,
                    "token_type": "Bearer"
                }));
        });

        let member_mock = api.mock(|when, then| {
            when.method(GET)
                .path("/v5/members/pshah_manager")
                .header("Authorization", "Bearer m2m-topcoder-123");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "handle": "pshah_manager",
                    "userId": 40152905,
                    "firstName": "First",
                    "lastName": "Last"
                }));
        });

        let bus_mock = api.mock(|when, then| {
            when.method(POST)
                .path("/v5/bus/events")
                .header("Authorization", "Bearer m2m-topcoder-123")
                .json_body_includes(
                    r#"{
                        "topic": "external.action.ubahn",
                        "originator": "u-bahn-api",
                        "mime-type": "application/json",
                        "payload": { "userId": 40152905, "resource": "user" }
                    }"#,
                );
            then.status(200);
        });

        // -------------------------------
        // 2. Build clients from config
        // -------------------------------
        let config = test_app_config(
            auth0.url("/oauth/token"),
            api.url("/v5/members"),
            api.url("/v5"),
        );
        let auth = M2mAuth::new(&config.auth0)?;
        let http = build_reqwest_client();
        let members = MembersClient::new(&config.api, http.clone());
        let bus = BusClient::new(&config.api, http);

        // -------------------------------
        // 3. Token -> member -> event
        // -------------------------------
        let token = auth.topcoder_token().await?;
        assert_eq!(token, "m2m-topcoder-123");

        let member = members.get_member("pshah_manager", &token).await?;
        assert_eq!(member["userId"], 40152905);

        bus.post_event(
            "external.action.ubahn",
            json!({ "userId": member["userId"], "resource": "user" }),
            &token,
        )
        .await?;

        token_mock.assert();
        member_mock.assert();
        bus_mock.assert();

        // -------------------------------
        // 4. Kafka options derive from the same config
        // -------------------------------
        let options = kafka_options(&config.kafka)?;
        assert_eq!(options.group_id, "ubahn-processor-group");
        assert_eq!(options.ssl, None);

        // configured default drives the pause between polls
        sleep(None, config.settings.sleep_time_ms.unwrap()).await;

        Ok(())
    }
}
