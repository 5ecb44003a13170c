#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = reelplan_ui::run() {
        eprintln!("ReelPlan failed: {err}");
        std::process::exit(1);
    }
}
