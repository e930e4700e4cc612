/// Demo entry point: plays the scripted session and prints each screen.
fn main() {
    use lvscroll::session::{demo_script, play};
    use lvscroll::{DemoApp, DemoConfig};
    use lvscroll_ui::ManualClock;

    let config = DemoConfig::load_or_create_default();

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let clock = ManualClock::new();
    let mut app = DemoApp::new(&config, clock.clone());

    play(&mut app, &clock, &demo_script(&config), |step, screen| {
        println!("== {:?}", step);
        println!("{}", screen);
    });
}
