//! Integration tests for full composition passes.
//!
//! Each test builds a component tree the way an external tree builder
//! would, hands it to a `Composition`, and checks the lines a renderer
//! would receive.

use quire::{
    BreakStrategy, Component, ComponentTree, Composition, Elasticity, FixedCount, LayoutConfig,
    LineFit, NodeId, OptimalBreak, ParagraphAware, SimpleBreak,
};

const EPS: f64 = 1e-9;

/// Builds a flat sequence of leaves with shared elasticity.
struct Fixture {
    tree: ComponentTree,
    ids: Vec<NodeId>,
}

impl Fixture {
    fn new(widths: &[f64], shrink: f64, stretch: f64) -> Self {
        let mut tree = ComponentTree::new();
        let elasticity = Elasticity::new(shrink, stretch).expect("valid elasticity");
        let ids = widths
            .iter()
            .map(|&w| tree.leaf(Component::new(w, 10.0, elasticity).expect("valid component")))
            .collect();
        Self { tree, ids }
    }

    fn compose(self, strategy: impl BreakStrategy + 'static, target_width: f64) -> Composition {
        let mut composition = Composition::new(strategy, target_width).expect("valid composition");
        composition
            .set_components(self.tree, self.ids)
            .expect("valid sequence");
        composition
    }
}

fn member_ids(composition: &Composition) -> Vec<NodeId> {
    composition
        .lines()
        .iter()
        .flat_map(|line| line.nodes())
        .collect()
}

#[test]
fn fixed_count_justifies_to_target() {
    let fixture = Fixture::new(&[40.0, 40.0, 40.0], 0.5, 1.5);
    let ids = fixture.ids.clone();
    let mut composition = fixture.compose(FixedCount::new(3).unwrap(), 150.0);

    let lines = composition.arrange();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].fit(), LineFit::Exact);
    for member in lines[0].members() {
        assert!((member.scale - 1.25).abs() < EPS);
        assert!((member.effective_width() - 50.0).abs() < EPS);
    }

    for id in ids {
        let component = composition.tree().component(id).unwrap();
        assert!((component.effective_width() - 50.0).abs() < EPS);
    }
}

#[test]
fn paragraph_aware_splits_before_overflow() {
    let fixture = Fixture::new(&[30.0, 30.0, 50.0, 20.0], 0.5, 2.0);
    let mut composition = fixture.compose(ParagraphAware::new(100.0, []).unwrap(), 100.0);

    let widths: Vec<Vec<f64>> = composition
        .arrange()
        .iter()
        .map(|line| line.members().iter().map(|m| m.natural.width).collect())
        .collect();
    assert_eq!(widths, vec![vec![30.0, 30.0], vec![50.0, 20.0]]);

    for line in composition.lines() {
        assert_eq!(line.fit(), LineFit::Exact);
        assert!((line.effective_width() - 100.0).abs() < EPS);
    }
}

#[test]
fn paragraph_boundary_ends_line_under_capacity() {
    let fixture = Fixture::new(&[10.0, 10.0, 10.0], 0.5, 1.5);
    let mut composition = fixture.compose(ParagraphAware::new(100.0, [1]).unwrap(), 100.0);

    let lines = composition.arrange();
    assert_eq!(lines.iter().map(|l| l.len()).collect::<Vec<_>>(), vec![1, 2]);
    // Far too short to stretch to 100.
    assert!(lines.iter().all(|l| l.is_underfull()));
}

#[test]
fn oversized_component_is_alone_and_overfull() {
    let mut tree = ComponentTree::new();
    let small = Elasticity::new(0.9, 1.1).unwrap();
    let a = tree.leaf(Component::new(40.0, 10.0, small).unwrap());
    let wide = tree.leaf(Component::new(150.0, 10.0, Elasticity::new(0.8, 1.0).unwrap()).unwrap());
    let b = tree.leaf(Component::new(40.0, 10.0, small).unwrap());

    let mut composition = Composition::new(ParagraphAware::new(100.0, []).unwrap(), 100.0).unwrap();
    composition.set_components(tree, vec![a, wide, b]).unwrap();
    let lines = composition.arrange();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].nodes().collect::<Vec<_>>(), vec![wide]);
    assert_eq!(lines[1].fit(), LineFit::Overfull);
    assert!((lines[1].members()[0].scale - 0.8).abs() < EPS);

    let overfull: Vec<usize> = composition.overfull_lines().map(|(i, _)| i).collect();
    assert_eq!(overfull, vec![1]);
}

#[test]
fn simple_gives_one_line_per_component() {
    let fixture = Fixture::new(&[5.0, 6.0, 7.0, 8.0], 0.5, 3.0);
    let ids = fixture.ids.clone();
    let mut composition = fixture.compose(SimpleBreak, 10.0);

    let lines = composition.arrange();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.len() == 1));
    assert_eq!(member_ids(&composition), ids);
}

#[test]
fn every_strategy_preserves_components_and_order() {
    let widths: Vec<f64> = (0..57).map(|i| ((i * 13) % 29) as f64 + 3.0).collect();
    let strategies: Vec<Box<dyn BreakStrategy>> = vec![
        Box::new(SimpleBreak),
        Box::new(FixedCount::new(4).unwrap()),
        Box::new(ParagraphAware::new(60.0, [10, 33]).unwrap()),
        Box::new(OptimalBreak::new(60.0, [10, 33]).unwrap()),
    ];

    for strategy in strategies {
        let name = strategy.name();
        let fixture = Fixture::new(&widths, 0.7, 1.6);
        let ids = fixture.ids.clone();
        let mut composition = fixture.compose(strategy, 60.0);
        composition.arrange();

        assert_eq!(member_ids(&composition), ids, "strategy {name}");
        for line in composition.lines() {
            assert!(!line.is_empty(), "strategy {name}");
            for member in line.members() {
                assert!(member.elasticity.contains(member.scale), "strategy {name}");
            }
            if line.fit() == LineFit::Exact {
                assert!((line.effective_width() - 60.0).abs() < 1e-6, "strategy {name}");
            }
        }
    }
}

#[test]
fn groups_are_broken_as_units_and_justified_inside() {
    // Three "words", each a rigid text run followed by elastic glue.
    let mut tree = ComponentTree::new();
    let glue = Elasticity::new(0.5, 3.0).unwrap();
    let mut words = Vec::new();
    let mut glues = Vec::new();
    for width in [20.0, 30.0, 25.0] {
        let text = tree.leaf(Component::rigid(width, 10.0).unwrap().with_text("w"));
        let space = tree.leaf(Component::new(5.0, 10.0, glue).unwrap());
        glues.push(space);
        words.push(tree.group_of([text, space]).unwrap());
    }

    let mut composition = Composition::new(ParagraphAware::new(70.0, []).unwrap(), 70.0).unwrap();
    composition.set_components(tree, words.clone()).unwrap();
    let lines = composition.arrange().to_vec();

    // 25 + 35 = 60 fits, adding 30 would not.
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].nodes().collect::<Vec<_>>(), vec![words[0], words[1]]);
    assert_eq!(lines[0].fit(), LineFit::Exact);

    let tree = composition.tree();
    let first_line_width: f64 = words[..2].iter().map(|&w| tree.effective_width(w)).sum();
    assert!((first_line_width - 70.0).abs() < 1e-6);

    // The glue absorbed the ten extra units; text runs kept their size.
    for &space in &glues[..2] {
        let c = tree.component(space).unwrap();
        assert!((c.effective_width() - 10.0).abs() < 1e-6);
    }
    for &word in &words {
        let text = tree.children(word)[0];
        assert_eq!(tree.component(text).unwrap().scale(), 1.0);
    }
}

#[test]
fn empty_group_is_a_zero_width_member() {
    let mut tree = ComponentTree::new();
    let a = tree.leaf(Component::new(50.0, 10.0, Elasticity::new(0.5, 2.0).unwrap()).unwrap());
    let placeholder = tree.group();

    let mut composition = Composition::new(FixedCount::new(2).unwrap(), 75.0).unwrap();
    composition.set_components(tree, vec![a, placeholder]).unwrap();
    let lines = composition.arrange();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].height(), 10.0);
    assert_eq!(lines[0].members()[1].natural.width, 0.0);
    assert_eq!(lines[0].members()[1].scale, 1.0);
    assert!((lines[0].members()[0].scale - 1.5).abs() < EPS);
}

#[test]
fn rearranging_after_strategy_change_replaces_lines() {
    let fixture = Fixture::new(&[10.0; 6], 0.5, 2.0);
    let mut composition = fixture.compose(SimpleBreak, 20.0);
    assert_eq!(composition.arrange().len(), 6);

    composition.set_strategy(FixedCount::new(2).unwrap());
    let lines = composition.arrange();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.fit() == LineFit::Exact));

    // Scales in the tree follow the latest pass.
    let first = composition.sequence()[0];
    assert_eq!(composition.tree().component(first).unwrap().scale(), 1.0);
}

#[test]
fn composition_from_toml_config() {
    let config = LayoutConfig::from_toml_str(
        r#"
        target_width = 150.0

        [strategy]
        kind = "fixed_count"
        count = 3
        "#,
    )
    .unwrap();

    let fixture = Fixture::new(&[40.0, 40.0, 40.0, 40.0], 0.5, 1.5);
    let mut composition = Composition::from_config(&config).unwrap();
    composition.set_components(fixture.tree, fixture.ids).unwrap();

    let lines = composition.arrange();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].fit(), LineFit::Exact);
    // A single 40-wide component cannot stretch to 150.
    assert_eq!(lines[1].fit(), LineFit::Underfull);
    assert_eq!(composition.underfull_lines().count(), 1);
}
