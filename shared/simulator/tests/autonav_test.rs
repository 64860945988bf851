use helm_autonav::{AutonavConfig, Outcome, Session, WindowId};
use helm_simulator::scenario::{self, Status, FRONTIER_LANE, MAX_TICKS};
use helm_simulator::simulation::{Hyperspace, Simulation};
use nalgebra::vector;
use test_log::test;

fn run(sim: &mut Simulation) {
    while sim.status() == Status::Running && sim.tick() < MAX_TICKS {
        sim.step();
    }
}

/// Runs to completion and returns every notice text seen on the way.
fn run_collecting(sim: &mut Simulation) -> Vec<String> {
    let mut texts: Vec<String> = sim.events().notices.iter().map(|n| n.text.clone()).collect();
    while sim.status() == Status::Running && sim.tick() < MAX_TICKS {
        sim.step();
        texts.extend(sim.events().notices.iter().map(|n| n.text.clone()));
    }
    texts
}

fn abort_reason(sim: &Simulation) -> Option<String> {
    match &sim.events().outcome {
        Some(Outcome::Aborted { reason }) => Some(reason.clone()),
        _ => None,
    }
}

#[test]
fn test_position_arrival() {
    let mut sim = Simulation::new("position", 0);
    assert_eq!(
        sim.session(),
        Session::PositionApproaching {
            target: vector![1000.0, 0.0]
        }
    );
    assert_eq!(sim.events().notices[0].text, "Autonav initialized.");

    let mut max_speed: f64 = 0.0;
    let mut arrived = false;
    while sim.status() == Status::Running && sim.tick() < MAX_TICKS {
        sim.step();
        max_speed = max_speed.max(sim.ship.speed());
        if sim.status() == Status::Arrived {
            assert!(sim
                .events()
                .notices
                .iter()
                .any(|n| n.text == "Autonav arrived at position."));
            assert_eq!(sim.events().outcome, Some(Outcome::Arrived));
            arrived = true;
        } else {
            assert!(matches!(sim.session(), Session::PositionApproaching { .. }));
        }
    }

    assert!(arrived);
    assert_eq!(sim.session(), Session::Inactive);
    assert!(max_speed <= sim.ship.data.max_speed + 1e-9);
    // Left coasting towards the target with the engine off.
    assert!(sim.ship.speed() > 0.0);
    assert_eq!(sim.ship.acceleration, 0.0);
    assert!(sim.ship.position.x < 1000.0);
}

#[test]
fn test_jump() {
    let mut sim = Simulation::new("jump", 0);
    let mut saw_braking = false;
    let mut jumps = vec![];
    while sim.status() == Status::Running && sim.tick() < MAX_TICKS {
        sim.step();
        saw_braking |= sim.session() == Session::JumpBraking;
        jumps.extend(sim.events().jumps.iter().copied());
        if let Hyperspace::Preparing { .. } = sim.hyperspace() {
            assert!(sim.ship.speed() < 5.0);
            assert_eq!(sim.ship.acceleration, 0.0);
        }
    }

    assert!(saw_braking);
    assert_eq!(jumps, vec![FRONTIER_LANE]);
    assert_eq!(sim.status(), Status::Jumped);
    assert_eq!(sim.events().arrived.as_deref(), Some("Beta"));
    assert_eq!(sim.region().name, "Beta");
    assert_eq!(sim.session(), Session::Inactive);
    assert_eq!(sim.nav_target(), None);
    assert_eq!(sim.ship.fuel, 0.0);
    assert_eq!(sim.ship.position, vector![-3000.0, 500.0]);
    assert_eq!(sim.ship.speed(), 0.0);
}

#[test]
fn test_lockon_aborts() {
    let mut sim = Simulation::new("lockon", 0);
    let texts = run_collecting(&mut sim);
    assert_eq!(sim.status(), Status::Aborted);
    assert!(sim.tick() < 200);
    assert_eq!(abort_reason(&sim).as_deref(), Some("Missile Lockon Detected"));
    assert!(texts
        .iter()
        .any(|t| t == "Autonav aborted: Missile Lockon Detected!"));
    assert_eq!(sim.session(), Session::Inactive);
    assert_eq!(sim.ship.acceleration, 0.0);
    // Still moving; abort cuts the engine but does not brake.
    assert!(sim.ship.speed() > 0.0);
}

#[test]
fn test_lockon_ignored_for_position_when_configured() {
    let config = AutonavConfig {
        lockon_abort_all_states: false,
        ..Default::default()
    };
    let mut sim = Simulation::with_config("test", 0, config);
    sim.ship.lockons = 2;
    sim.start_autonav_position(1000.0, 0.0);
    run(&mut sim);
    assert_eq!(sim.status(), Status::Arrived);
}

#[test]
fn test_lockon_aborts_position_by_default() {
    let mut sim = Simulation::new("test", 0);
    sim.start_autonav_position(1000.0, 0.0);
    sim.step();
    sim.ship.lockons = 1;
    sim.step();
    assert_eq!(sim.status(), Status::Aborted);
    assert_eq!(abort_reason(&sim).as_deref(), Some("Missile Lockon Detected"));
}

#[test]
fn test_fuel_leak_aborts() {
    let mut sim = Simulation::new("fuel_leak", 0);
    let mut jumps = 0;
    let mut texts = vec![];
    while sim.status() == Status::Running && sim.tick() < MAX_TICKS {
        sim.step();
        jumps += sim.events().jumps.len();
        texts.extend(sim.events().notices.iter().map(|n| n.text.clone()));
    }
    assert_eq!(sim.status(), Status::Aborted);
    assert_eq!(jumps, 0);
    assert_eq!(*sim.hyperspace(), Hyperspace::Idle);
    assert_eq!(
        abort_reason(&sim).as_deref(),
        Some("Not enough fuel for autonav to continue")
    );
    assert!(texts
        .iter()
        .any(|t| t == "Autonav aborted: Not enough fuel for autonav to continue!"));
    assert_eq!(sim.region().name, "Alpha");
}

#[test]
fn test_region_reload_aborts() {
    let mut sim = Simulation::new("region_reload", 0);
    run(&mut sim);
    assert_eq!(sim.status(), Status::Aborted);
    assert!(sim.tick() < 100);
    assert_eq!(
        abort_reason(&sim).as_deref(),
        Some("Target changed to current system")
    );
    // The stale index is kept; it just no longer resolves.
    assert_eq!(sim.nav_target(), Some(FRONTIER_LANE));
    assert!(sim.region().lane(FRONTIER_LANE).is_none());
}

#[test]
fn test_drift() {
    for seed in 0..20 {
        let mut sim = Simulation::new("drift", seed);
        let max_speed = sim.ship.data.max_speed;
        while sim.status() == Status::Running && sim.tick() < MAX_TICKS {
            sim.step();
            assert!(sim.ship.speed() <= max_speed + 1e-9);
        }
        assert_eq!(
            sim.status(),
            Status::Arrived,
            "drift did not arrive with seed {}",
            seed
        );
    }
}

#[test]
fn test_deterministic() {
    let final_snapshot = |seed: u32| {
        let mut sim = Simulation::new("drift", seed);
        run(&mut sim);
        serde_json::to_string(&sim.snapshot()).unwrap()
    };
    assert_eq!(final_snapshot(3), final_snapshot(3));
}

#[test]
fn test_start_refused_without_fuel() {
    let mut sim = Simulation::new("test", 0);
    sim.ship.fuel = 50.0;
    sim.select_jump(Some(FRONTIER_LANE));
    sim.start_autonav_jump();
    assert_eq!(sim.session(), Session::Inactive);
    let texts: Vec<&str> = sim.events().notices.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, vec!["Not enough fuel to jump for autonav."]);
    assert_eq!(sim.status(), Status::Running);
}

#[test]
fn test_start_refused_under_manual_control() {
    let mut sim = Simulation::new("test", 0);
    sim.ship.manual_control = true;
    sim.select_jump(Some(FRONTIER_LANE));
    sim.start_autonav_jump();
    sim.start_autonav_position(100.0, 100.0);
    assert_eq!(sim.session(), Session::Inactive);
    assert!(sim.events().notices.is_empty());
}

#[test]
fn test_start_refused_without_target() {
    let mut sim = Simulation::new("test", 0);
    sim.start_autonav_jump();
    assert_eq!(sim.session(), Session::Inactive);
    assert!(sim.events().notices.is_empty());

    sim.select_jump(Some(helm_autonav::JumpPointId(7)));
    sim.start_autonav_jump();
    assert_eq!(sim.session(), Session::Inactive);
}

#[test]
fn test_explicit_abort() {
    let mut sim = Simulation::new("test", 0);
    sim.start_autonav_position(1000.0, 0.0);
    for _ in 0..30 {
        sim.step();
    }
    sim.abort_autonav(Some("user request"));
    assert_eq!(sim.status(), Status::Aborted);
    assert_eq!(sim.session(), Session::Inactive);
    assert_eq!(sim.events().notices[0].text, "Autonav aborted: user request!");
    assert_eq!(sim.ship.acceleration, 0.0);

    // Nothing to abort any more.
    sim.step();
    sim.abort_autonav(None);
    assert!(sim.events().notices.is_empty());
}

#[test]
fn test_abort_during_hyperspace_preparation() {
    let mut sim = Simulation::new("jump", 0);
    while !matches!(sim.hyperspace(), Hyperspace::Preparing { .. }) {
        assert!(sim.tick() < MAX_TICKS);
        sim.step();
    }
    sim.abort_autonav(None);
    assert_eq!(*sim.hyperspace(), Hyperspace::Idle);
    assert_eq!(sim.status(), Status::Aborted);
    let texts: Vec<&str> = sim.events().notices.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Autonav aborted!", "Aborting hyperspace sequence."]
    );

    for _ in 0..600 {
        sim.step();
    }
    assert_eq!(sim.region().name, "Alpha");
    assert_eq!(sim.ship.fuel, 100.0);
}

#[test]
fn test_abort_in_hyperspace_ignored() {
    let mut sim = Simulation::new("jump", 0);
    while !matches!(sim.hyperspace(), Hyperspace::Flying { .. }) {
        assert!(sim.tick() < MAX_TICKS);
        sim.step();
    }
    sim.abort_autonav(Some("too late"));
    assert!(sim.events().notices.is_empty());
    assert_ne!(sim.status(), Status::Aborted);
    run(&mut sim);
    assert_eq!(sim.status(), Status::Jumped);
    assert_eq!(sim.region().name, "Beta");
}

#[test]
fn test_start_from_window() {
    let mut sim = Simulation::new("test", 0);
    let window = WindowId(3);
    sim.open_window(window);

    // No target selected: the window stays open.
    sim.start_autonav_jump_window(window);
    assert_eq!(sim.open_windows(), &[window]);
    assert_eq!(sim.session(), Session::Inactive);

    sim.select_jump(Some(FRONTIER_LANE));
    sim.start_autonav_jump_window(window);
    assert!(sim.open_windows().is_empty());
    assert_eq!(sim.events().closed_windows, vec![window]);
    assert_eq!(sim.session(), Session::JumpApproaching);

    run(&mut sim);
    assert_eq!(sim.status(), Status::Jumped);
}

#[test]
fn test_time_compression() {
    let config = AutonavConfig {
        time_compression: 4.0,
        ..Default::default()
    };
    let mut sim = Simulation::with_config("test", 0, config);
    sim.start_autonav_position(3000.0, 0.0);
    assert_eq!(sim.time_compression(), 4.0);
    sim.step();
    assert!(sim.time() > 2.0 / 60.0);

    run(&mut sim);
    assert_eq!(sim.status(), Status::Arrived);
    assert_eq!(sim.time_compression(), 1.0);
}

#[test]
fn test_time_compression_ends_on_abort() {
    let config = AutonavConfig {
        time_compression: 4.0,
        ..Default::default()
    };
    let mut sim = Simulation::with_config("test", 0, config);
    sim.select_jump(Some(FRONTIER_LANE));
    sim.start_autonav_jump();
    sim.step();
    sim.ship.lockons = 1;
    sim.step();
    assert_eq!(sim.status(), Status::Aborted);
    assert_eq!(sim.time_compression(), 1.0);
}

#[test]
fn test_restart_after_arrival() {
    let mut sim = Simulation::new("position", 0);
    run(&mut sim);
    assert_eq!(sim.status(), Status::Arrived);
    sim.start_autonav_position(-2000.0, 0.0);
    assert_eq!(sim.status(), Status::Running);
    run(&mut sim);
    assert_eq!(sim.status(), Status::Arrived);
}

#[test]
fn test_scenario_list() {
    for name in scenario::list() {
        let mut sim = Simulation::new(&name, 1);
        run(&mut sim);
        assert_ne!(sim.status(), Status::Running, "{} did not finish", name);
    }
}
