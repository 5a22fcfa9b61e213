use json_pointer_eval::{Pointer, PointerError};
use serde_json::json;

fn main() {
    env_logger::init();

    let input = json!({
        "config": {
            "servers": [
                { "host": "alpha", "port": 8080 },
                { "host": "beta", "port": 8081 }
            ],
            "owner": "ops"
        }
    });

    let pointer = Pointer::new("/config/servers/1/host").expect("Failed to parse pointer");
    println!("{pointer} => {}", pointer.get_value(&input).expect("Failed to resolve pointer"));

    let missing = Pointer::new("/config/servers/2/host").expect("Failed to parse pointer");
    match missing.get_value(&input) {
        Err(PointerError::IndexOutOfBounds { index, len, position }) => {
            println!("{missing}: token {position} asks for index {index}, array has {len}");
        }
        other => println!("{missing}: {other:?}"),
    }
}
