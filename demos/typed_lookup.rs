use json_pointer_eval::Pointer;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize, Debug)]
#[allow(dead_code)]
struct Server {
    host: String,
    port: u16,
}

#[derive(Deserialize, Debug)]
struct Settings {
    primary: Pointer,
}

fn main() {
    env_logger::init();

    let input = json!({
        "servers": [
            { "host": "alpha", "port": 8080 },
            { "host": "beta", "port": 8081 }
        ]
    });

    let settings: Settings =
        serde_json::from_value(json!({ "primary": "/servers/0" })).expect("Failed to read settings");

    let server: Server = settings
        .primary
        .get_value_as(&input)
        .expect("Failed to resolve server");

    println!("{:?}", server);
}
