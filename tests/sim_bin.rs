use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "--seed", "1", "--games", "3"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"].as_array().map(Vec::len), Some(3));
    let wins = v["player_wins"].as_u64().unwrap() + v["computer_wins"].as_u64().unwrap();
    assert_eq!(wins, 3);
    assert!(v["games"][0]["winner"].is_string());
}
