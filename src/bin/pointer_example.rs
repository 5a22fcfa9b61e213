use json_pointer_eval::Pointer;
use serde_json::json;

fn main() {
    let input = json!({
        "project": {
            "name": "json_pointer_eval",
            "tags": ["json", "rfc6901"]
        },
        "a/b": { "m~n": 8 }
    });

    for raw in ["", "/project/name", "/project/tags/1", "/a~1b/m~0n", "/project/tags/9", "project"] {
        match Pointer::new(raw).and_then(|pointer| pointer.get_value(&input).cloned()) {
            Ok(value) => println!("{raw:?} => {value}"),
            Err(err) => println!("{raw:?} => {err}"),
        }
    }
}
