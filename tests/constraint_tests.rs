use approx::assert_relative_eq;
use weft::{
    DistanceConstraint, Node, NodeHandle, Simulation, SimulationConfig, SimulationError, Vec,
    Vec3,
};

fn pair(a: Vec3<f32>, b: Vec3<f32>) -> [Node<Vec3<f32>>; 2] {
    [Node::new(a, 1.0), Node::new(b, 1.0)]
}

fn handles() -> (NodeHandle, NodeHandle) {
    (NodeHandle::from_index(0), NodeHandle::from_index(1))
}

#[test]
fn rest_length_is_initial_separation() {
    let nodes = pair(Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 4.0, 12.0));
    let (a, b) = handles();
    let c = DistanceConstraint::new(a, b, &nodes, 0.4).unwrap();
    assert_eq!(c.rest_length(), 13.0);
    assert_eq!(c.stiffness(), 0.4);
}

#[test]
fn no_force_at_rest_length() {
    let mut nodes = pair(Vec3::new(0.1, -0.3, 0.7), Vec3::new(-1.2, 0.9, 0.05));
    let (a, b) = handles();
    let c = DistanceConstraint::new(a, b, &nodes, 0.4).unwrap();
    c.solve(&mut nodes);
    assert!(nodes[0].force().length() < 1e-7);
    assert!(nodes[1].force().length() < 1e-7);
    assert_eq!(c.strain(&nodes), 0.0);
}

#[test]
fn stretched_pair_is_pulled_together() {
    let rest = pair(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    let (a, b) = handles();
    let c = DistanceConstraint::new(a, b, &rest, 0.4).unwrap();

    let mut stretched = pair(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
    c.solve(&mut stretched);

    // ((1 - 2) / 2) / 2 * 0.4 = -0.1 along +x on b, mirrored on a.
    assert_relative_eq!(stretched[1].force().x, -0.1, epsilon = 1e-6);
    assert_relative_eq!(stretched[0].force().x, 0.1, epsilon = 1e-6);
    assert_eq!(stretched[0].force() + stretched[1].force(), Vec3::zero());
}

#[test]
fn compressed_pair_is_pushed_apart() {
    let rest = pair(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
    let (a, b) = handles();
    let c = DistanceConstraint::new(a, b, &rest, 1.0).unwrap();

    let mut compressed = pair(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
    c.solve(&mut compressed);
    assert!(compressed[1].force().y > 0.0);
    assert!(compressed[0].force().y < 0.0);
}

#[test]
fn coincident_endpoints_are_skipped() {
    let rest = pair(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    let (a, b) = handles();
    let c = DistanceConstraint::new(a, b, &rest, 0.4).unwrap();

    let p = Vec3::new(0.5, 0.5, 0.5);
    let mut coincident = pair(p, p);
    c.solve(&mut coincident);
    assert_eq!(coincident[0].force(), Vec3::zero());
    assert_eq!(coincident[1].force(), Vec3::zero());
}

#[test]
fn static_endpoint_receives_no_force() {
    let mut nodes = [
        Node::new(Vec3::new(0.0f32, 0.0, 0.0), 0.0),
        Node::new(Vec3::new(1.0f32, 0.0, 0.0), 1.0),
    ];
    let (a, b) = handles();
    let c = DistanceConstraint::new(a, b, &nodes, 0.4).unwrap();
    nodes[1].add_force(Vec3::new(5.0, 0.0, 0.0));
    nodes[1].update(0.1);
    c.solve(&mut nodes);
    assert_eq!(nodes[0].force(), Vec3::zero());
    assert!(nodes[1].force().x < 0.0);
}

#[test]
fn static_endpoint_never_moves_under_simulation() {
    let mut sim = Simulation::new(
        SimulationConfig::new().with_gravity(Vec3::new(0.0f32, -9.81, 0.0)),
    );
    let anchor = sim.create_node(Vec3::new(0.0, 0.0, 0.0), 0.0).unwrap();
    let bob = sim.create_node(Vec3::new(0.5, -1.0, 0.0), 0.01).unwrap();
    sim.create_constraint(anchor, bob, 0.4).unwrap();

    let bob_start = sim.node(bob).unwrap().position();
    for _ in 0..1000 {
        sim.update(1.0 / 60.0).unwrap();
        assert_eq!(sim.node(anchor).unwrap().position(), Vec3::new(0.0, 0.0, 0.0));
    }
    assert_ne!(sim.node(bob).unwrap().position(), bob_start);
    assert!(sim.is_finite());
}

#[test]
fn rejects_invalid_pairs() {
    let nodes = pair(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0));
    let (a, b) = handles();

    assert_eq!(
        DistanceConstraint::new(a, a, &nodes, 0.4).err(),
        Some(SimulationError::SelfConstraint { node: 0 })
    );
    assert_eq!(
        DistanceConstraint::new(a, b, &nodes, 0.4).err(),
        Some(SimulationError::DegenerateConstraint { a: 0, b: 1 })
    );
    assert_eq!(
        DistanceConstraint::new(a, NodeHandle::from_index(7), &nodes, 0.4).err(),
        Some(SimulationError::NodeOutOfBounds { index: 7, count: 2 })
    );

    let apart = pair(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(
        DistanceConstraint::new(a, b, &apart, -1.0).err(),
        Some(SimulationError::InvalidStiffness)
    );
    assert_eq!(
        DistanceConstraint::new(a, b, &apart, f32::NAN).err(),
        Some(SimulationError::InvalidStiffness)
    );
}
