use std::process::Command;

use serde_json::Value;

#[test]
fn test_sim_binary_prints_one_line_per_game() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["7", "3"])
        .output()
        .expect("run sim");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let games: Vec<Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(games.len(), 3);
    for (i, game) in games.iter().enumerate() {
        assert_eq!(game["seed"], 7 + i as u64);
        assert!(matches!(game["winner"].as_str(), Some("Human" | "Opponent")));
        assert!(game["human_shots"].as_u64().unwrap() >= 1);
        assert!(game["opponent_shots"].is_u64());
    }
}

#[test]
fn test_sim_binary_is_deterministic() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["123", "2", "--no-prune"])
            .output()
            .expect("run sim")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_main_binary_sim_subcommand() {
    let output = Command::new(env!("CARGO_BIN_EXE_seabattle"))
        .args(["sim", "--seed", "99"])
        .output()
        .expect("run seabattle");
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["seed"], 99);
    assert!(report["human_shots"].as_u64().unwrap() >= 1);
}

#[test]
fn test_both_binaries_print_the_same_report() {
    let sim = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["31"])
        .output()
        .expect("run sim");
    let main = Command::new(env!("CARGO_BIN_EXE_seabattle"))
        .args(["sim", "--seed", "31"])
        .output()
        .expect("run seabattle");
    assert!(sim.status.success() && main.status.success());
    assert_eq!(sim.stdout, main.stdout);
}
