use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Post one restyle request to a locally running proxy
    let server_url =
        std::env::var("SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:8190".to_string());

    let body = json!({
        "imageUrl": "https://upcdn.io/FW25b4E/image/demo/room.png",
        "room": "Bedroom",
        "theme": "Coastal",
    });

    let client = reqwest::Client::new();
    println!("Submitting restyle request to {}", server_url);
    let response = client
        .post(format!("{}/generate", server_url))
        .json(&body)
        .send()
        .await?;

    println!("Status: {}", response.status());
    println!("Body: {}", response.text().await?);
    Ok(())
}
