use quickcheck::{Arbitrary, Gen};

use crate::{Label, Rule, Rules};

const ADJECTIVES: &[&str] = &[
    "bright", "clear", "dark", "dim", "dotted", "drab", "dull", "faded", "light", "muted", "pale",
    "plaid", "posh", "shiny", "striped", "vibrant", "wavy",
];

const COLOURS: &[&str] = &[
    "aqua", "beige", "black", "blue", "bronze", "brown", "coral", "crimson", "cyan", "fuchsia",
    "gold", "gray", "green", "indigo", "lavender", "lime", "magenta", "maroon", "olive", "orange",
    "plum", "purple", "red", "salmon", "silver", "tan", "teal", "tomato", "turquoise", "violet",
    "white", "yellow",
];

impl Arbitrary for Label {
    fn arbitrary(g: &mut Gen) -> Label {
        let adjective = g.choose(ADJECTIVES).unwrap();
        let colour = g.choose(COLOURS).unwrap();
        Label(format!("{} {}", adjective, colour))
    }
}

impl Arbitrary for Rule {
    fn arbitrary(g: &mut Gen) -> Rule {
        let mut contents = Vec::new();
        for label in distinct_labels(g, g.size().saturating_sub(1)) {
            contents.push((label, multiplicity(g)));
        }
        Rule::new(Label::arbitrary(g), contents)
    }
}

impl Arbitrary for Rules {
    fn arbitrary(g: &mut Gen) -> Rules {
        // Edges only run from earlier labels to later ones, keeping every
        // generated document acyclic.
        let labels = distinct_labels(g, g.size());
        let mut rules = Vec::new();
        for (i, container) in labels.iter().enumerate() {
            let mut contents = Vec::new();
            for content in labels.iter().skip(i + 1) {
                if bool::arbitrary(g) {
                    contents.push((content.clone(), multiplicity(g)));
                }
            }
            rules.push(Rule::new(container.clone(), contents));
        }
        Rules(rules)
    }
}

fn distinct_labels(g: &mut Gen, want: usize) -> Vec<Label> {
    let mut labels: Vec<Label> = Vec::new();
    for _ in 0..want {
        let label = Label::arbitrary(g);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

fn multiplicity(g: &mut Gen) -> u32 {
    *g.choose(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap()
}
