use pusher_rest::{Pusher, PusherConfig};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Reads PUSHER_APP_ID, PUSHER_KEY, PUSHER_SECRET (and optional extras)
    let config = PusherConfig::from_env("PUSHER")?;
    let pusher = Pusher::new(config)?;

    let channel = std::env::args().nth(1).unwrap_or_else(|| "test-channel".to_string());

    println!("Triggering event on '{}'...", channel);
    match pusher
        .trigger(&[channel.as_str()], "test-event", &json!({"message": "hello"}), None)
        .await
    {
        Ok(response) => {
            println!("Delivered ({}): {}", response.status, response.text());
        }
        Err(e) => {
            println!("Error triggering event: {}", e);
            if let Some(request_error) = e.as_request_error() {
                println!("  kind: {}", request_error.kind);
                if let Some(body) = request_error.body_text() {
                    println!("  body: {}", body);
                }
            }
        }
    }

    Ok(())
}
