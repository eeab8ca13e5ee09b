use quadflock::{
    initialize, Boid, FlockRules, IndexKind, NeighborIndex, Quadtree, Rect, Simulation,
    SimulationParams, Vector2,
};

fn seeded(population: usize) -> SimulationParams {
    SimulationParams {
        population,
        world_width: 500.0,
        world_height: 400.0,
        rng_seed: Some(0xDEADBEEF),
        ..SimulationParams::default()
    }
}

#[test]
fn step_conserves_population() {
    let mut sim = Simulation::new(seeded(300)).expect("sim");
    for _ in 0..25 {
        sim.step();
        assert_eq!(sim.boids().len(), 300);
    }
}

#[test]
fn speed_never_exceeds_max_speed() {
    let params = SimulationParams {
        max_speed: 2.5,
        separation_gain: 3.0,
        cohesion_gain: 1.0,
        initial_speed_max: 2.5,
        ..seeded(400)
    };
    let mut sim = Simulation::new(params).expect("sim");

    for _ in 0..40 {
        sim.step();
        for boid in sim.boids() {
            assert!(boid.velocity.is_finite());
            assert!(boid.speed() <= 2.5 + 1e-4, "speed {}", boid.speed());
        }
    }
}

#[test]
fn huge_gain_still_clamps_to_max_speed() {
    let params = SimulationParams {
        world_width: 300.0,
        world_height: 300.0,
        max_speed: 4.0,
        cohesion_gain: 1e20,
        separation_gain: 0.0,
        alignment_gain: 0.0,
        ..SimulationParams::default()
    };
    let boids = vec![
        Boid::new(Vector2::new(100.0, 100.0), Vector2::ZERO),
        Boid::new(Vector2::new(110.0, 100.0), Vector2::ZERO),
    ];
    let mut sim = Simulation::from_boids(boids, params).expect("sim");
    sim.step();

    let after = sim.boids();
    assert!((after[0].speed() - 4.0).abs() < 1e-3, "speed {}", after[0].speed());
    assert!((after[1].speed() - 4.0).abs() < 1e-3, "speed {}", after[1].speed());
    // pulled toward each other along x
    assert!((after[0].velocity.x - 4.0).abs() < 1e-3 && after[0].velocity.y.abs() < 1e-3);
    assert!((after[1].velocity.x + 4.0).abs() < 1e-3 && after[1].velocity.y.abs() < 1e-3);
    assert!((after[0].position.x - 104.0).abs() < 1e-3);
    assert!((after[1].position.x - 106.0).abs() < 1e-3);
}

#[test]
fn boids_stay_inside_world_after_every_tick() {
    let params = SimulationParams {
        max_speed: 12.0,
        initial_speed_min: 10.0,
        initial_speed_max: 12.0,
        ..seeded(200)
    };
    let world = Rect::from_size(params.world_width, params.world_height);
    let mut sim = Simulation::new(params).expect("sim");

    for _ in 0..100 {
        sim.step();
        assert!(sim.boids().iter().all(|b| world.contains(b.position)));
        assert_eq!(sim.index_stats().entries, 200);
    }
}

#[test]
fn boid_leaving_an_edge_reenters_on_the_opposite_edge() {
    let params = SimulationParams {
        world_width: 100.0,
        world_height: 80.0,
        max_speed: 10.0,
        ..SimulationParams::default()
    };
    let boids = vec![
        // x = 95 + 10 = width + 5
        Boid::new(Vector2::new(95.0, 40.0), Vector2::new(10.0, 0.0)),
        // x = 2 - 5 = -3
        Boid::new(Vector2::new(2.0, 10.0), Vector2::new(-5.0, 0.0)),
        // y = 78 + 7 = height + 5
        Boid::new(Vector2::new(50.0, 78.0), Vector2::new(0.0, 7.0)),
        // y = 1 - 4 = -3
        Boid::new(Vector2::new(20.0, 1.0), Vector2::new(0.0, -4.0)),
    ];
    // radii small enough that the four boids never see each other
    let params = SimulationParams {
        separation_radius: 1.0,
        cohesion_radius: 1.0,
        alignment_radius: 1.0,
        ..params
    };
    let mut sim = Simulation::from_boids(boids, params).expect("sim");
    sim.step();

    let positions: Vec<Vector2> = sim.boids().iter().map(|b| b.position).collect();
    assert_eq!(positions[0], Vector2::new(0.0, 40.0));
    assert_eq!(positions[1], Vector2::new(100.0, 10.0));
    assert_eq!(positions[2], Vector2::new(50.0, 0.0));
    assert_eq!(positions[3], Vector2::new(20.0, 80.0));
}

#[test]
fn isolated_boid_keeps_its_velocity() {
    let velocity = Vector2::new(1.5, -0.5);
    let boids = vec![Boid::new(Vector2::new(250.0, 200.0), velocity)];
    let mut sim = Simulation::from_boids(boids, seeded(1)).expect("sim");

    sim.run(5);
    assert_eq!(sim.boids()[0].velocity, velocity);
    assert_eq!(
        sim.boids()[0].position,
        Vector2::new(250.0, 200.0) + velocity * 5.0
    );
}

#[test]
fn seeded_runs_are_identical() {
    let mut a = Simulation::new(seeded(250)).expect("a");
    let mut b = Simulation::new(seeded(250)).expect("b");
    assert_eq!(a.boids(), b.boids());

    a.run(30);
    b.run(30);
    assert_eq!(a.tick(), 30);
    assert_eq!(a.boids(), b.boids());
}

#[test]
fn parallel_and_sequential_steps_match() {
    let sequential = seeded(250);
    let parallel = SimulationParams {
        parallel: true,
        ..sequential.clone()
    };
    let mut a = Simulation::new(sequential).expect("a");
    let mut b = Simulation::new(parallel).expect("b");

    a.run(20);
    b.run(20);
    assert_eq!(a.boids(), b.boids());
}

#[test]
fn quadtree_and_brute_force_runs_stay_close() {
    let quadtree = seeded(150);
    let brute = SimulationParams {
        index: IndexKind::BruteForce,
        ..quadtree.clone()
    };
    let mut a = Simulation::new(quadtree).expect("a");
    let mut b = Simulation::new(brute).expect("b");

    // neighbor visit order differs, so sums can differ in the last bits
    a.run(5);
    b.run(5);
    for (x, y) in a.boids().iter().zip(b.boids()) {
        assert!(x.position.distance(y.position) < 1e-2);
    }
}

#[test]
fn three_boid_cohesion_scenario() {
    let params = SimulationParams {
        world_width: 300.0,
        world_height: 300.0,
        cohesion_radius: 50.0,
        separation_radius: 1.0,
        alignment_radius: 1.0,
        ..SimulationParams::default()
    };
    let boids = vec![
        Boid::new(Vector2::new(0.0, 0.0), Vector2::ZERO),
        Boid::new(Vector2::new(10.0, 0.0), Vector2::ZERO),
        Boid::new(Vector2::new(200.0, 200.0), Vector2::ZERO),
    ];

    let mut index = Quadtree::new(Rect::from_size(300.0, 300.0), 1);
    let positions: Vec<Vector2> = boids.iter().map(|b| b.position).collect();
    assert_eq!(index.rebuild(&positions), 0);

    let rules = FlockRules::from(&params);
    let midpoint = Vector2::new(5.0, 0.0);
    let first = rules.cohesion(&index, &boids, 0);
    let second = rules.cohesion(&index, &boids, 1);
    assert!(first.x > 0.0 && first.y == 0.0);
    assert!(second.x < 0.0 && second.y == 0.0);
    assert!(first.dot(midpoint - boids[0].position) > 0.0);
    assert!(second.dot(midpoint - boids[1].position) > 0.0);
    assert_eq!(rules.cohesion(&index, &boids, 2), Vector2::ZERO);

    let mut sim = Simulation::from_boids(boids, params).expect("sim");
    sim.step();
    let after = sim.boids();
    assert!(after[0].velocity.x > 0.0);
    assert!(after[1].velocity.x < 0.0);
    assert_eq!(after[2].velocity, Vector2::ZERO);
    assert_eq!(after[2].position, Vector2::new(200.0, 200.0));
}

#[test]
fn invalid_configuration_is_rejected_at_initialize() {
    let base = SimulationParams::default();
    assert!(initialize(0, 100.0, 100.0, base.clone()).is_err());
    assert!(initialize(10, 0.0, 100.0, base.clone()).is_err());
    assert!(initialize(10, 100.0, -1.0, base.clone()).is_err());

    for params in [
        SimulationParams { separation_radius: 0.0, ..base.clone() },
        SimulationParams { cohesion_radius: -3.0, ..base.clone() },
        SimulationParams { alignment_radius: 0.0, ..base.clone() },
        SimulationParams { max_speed: 0.0, ..base.clone() },
    ] {
        let err = initialize(10, 100.0, 100.0, params).err().expect("rejected");
        assert!(!err.to_string().is_empty());
    }
}
