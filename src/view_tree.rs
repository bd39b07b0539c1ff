//! Runtime-independent description of the landing page.
//!
//! `landing_view` maps the compiled-in navigation entries to an immutable tree
//! of display nodes. The Leptos component in `pages::landing` renders this
//! tree; nothing here touches the DOM, so the structure can be checked natively.

use crate::site::{NavEntry, CONTACT_LINK, EXPLORE_LINKS};

/// A run of inline text inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Plain(&'static str),
    Strong(&'static str),
}

/// A node of the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    /// Layout container; `class` selects the CSS layout
    Block {
        class: &'static str,
        children: Vec<ViewNode>,
    },
    Heading {
        level: u8,
        text: &'static str,
    },
    Paragraph {
        class: &'static str,
        runs: Vec<Inline>,
    },
    /// The embedded simulation surface
    SimulationCanvas,
    /// Bulleted navigation links
    LinkList(Vec<NavEntry>),
    /// Prominent single link rendered as a button
    CallToAction(NavEntry),
}

impl ViewNode {
    fn block(class: &'static str, children: Vec<ViewNode>) -> Self {
        ViewNode::Block { class, children }
    }

    fn heading(level: u8, text: &'static str) -> Self {
        ViewNode::Heading { level, text }
    }

    fn paragraph(class: &'static str, runs: Vec<Inline>) -> Self {
        ViewNode::Paragraph { class, runs }
    }

    /// Depth-first, pre-order traversal.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ViewNode)) {
        visit(self);
        if let ViewNode::Block { children, .. } = self {
            for child in children {
                child.walk(visit);
            }
        }
    }

    pub fn count(&self, pred: impl Fn(&ViewNode) -> bool) -> usize {
        let mut n = 0;
        self.walk(&mut |node| {
            if pred(node) {
                n += 1;
            }
        });
        n
    }

    /// Every link in the tree, in document order.
    pub fn links(&self) -> Vec<&NavEntry> {
        let mut out = Vec::new();
        self.walk(&mut |node| match node {
            ViewNode::LinkList(entries) => out.extend(entries.iter()),
            ViewNode::CallToAction(entry) => out.push(entry),
            _ => {}
        });
        out
    }

    pub fn find_link(&self, label_fragment: &str) -> Option<&NavEntry> {
        self.links()
            .into_iter()
            .find(|entry| entry.label.contains(label_fragment))
    }
}

/// Build the landing page: simulation column on the left, welcome copy and
/// navigation on the right. Stacks to a single column on narrow screens.
pub fn landing_view() -> ViewNode {
    let simulation = ViewNode::block(
        "landing-column simulation-column",
        vec![
            ViewNode::heading(1, "\u{1F9EA} Neural Cellular Automata Simulator"),
            ViewNode::paragraph(
                "tagline",
                vec![Inline::Plain(
                    "Experience the dynamics of Neural Cellular Automata in real-time.",
                )],
            ),
            ViewNode::SimulationCanvas,
        ],
    );

    let explore = ViewNode::block(
        "explore",
        vec![
            ViewNode::heading(2, "\u{1F310} Explore More:"),
            ViewNode::LinkList(EXPLORE_LINKS.to_vec()),
        ],
    );

    let join = ViewNode::block(
        "join-us",
        vec![
            ViewNode::heading(2, "\u{1F91D} Join Us!"),
            ViewNode::paragraph(
                "",
                vec![Inline::Plain(
                    "Interested in working on this project? We'd love to hear from you!",
                )],
            ),
            ViewNode::CallToAction(CONTACT_LINK),
        ],
    );

    let content = ViewNode::block(
        "landing-column content-column",
        vec![
            ViewNode::heading(2, "Welcome to Neural Cellular Automata"),
            ViewNode::paragraph(
                "lead",
                vec![
                    Inline::Plain("We are a research project team under "),
                    Inline::Strong("Monash DeepNeuron"),
                    Inline::Plain(
                        ", exploring the potential of Neural Cellular Automata (NCA) for various \
                         applications. Our goal is to understand, simulate, and improve NCA models.",
                    ),
                ],
            ),
            explore,
            join,
        ],
    );

    ViewNode::block("landing-grid", vec![simulation, content])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{Activation, NavTarget};

    #[test]
    fn test_exactly_one_canvas() {
        let view = landing_view();
        assert_eq!(view.count(|n| matches!(n, ViewNode::SimulationCanvas)), 1);
    }

    #[test]
    fn test_exactly_four_internal_links() {
        let view = landing_view();
        let internal: Vec<_> = view
            .links()
            .into_iter()
            .filter(|e| matches!(e.target, NavTarget::Internal(_)))
            .collect();
        assert_eq!(internal.len(), 4);

        let declared = ["/nca-intro", "/nca-research", "/simulator-home", "/keeping-up"];
        for entry in internal {
            let matches = declared.iter().filter(|p| **p == entry.href()).count();
            assert_eq!(matches, 1, "{} should match exactly one declared path", entry.href());
            assert_eq!(entry.resolve(), Activation::Route(entry.href()));
        }
    }

    #[test]
    fn test_rerender_is_identical() {
        let first = landing_view();
        for _ in 0..3 {
            assert_eq!(landing_view(), first);
        }
    }

    #[test]
    fn test_simulator_link_targets_simulator_home() {
        let view = landing_view();
        let link = view.find_link("Simulator").expect("simulator link present");
        assert_eq!(link.href(), "/simulator-home");
    }

    #[test]
    fn test_get_in_touch_href() {
        let view = landing_view();
        let link = view.find_link("Get in Touch").expect("contact link present");
        assert_eq!(link.href(), "https://www.deepneuron.org/contact-us");
        assert!(matches!(
            link.resolve(),
            Activation::NewContext { target: "_blank", rel: "noopener noreferrer", .. }
        ));
    }

    #[test]
    fn test_external_links_render_isolated() {
        let view = landing_view();
        let external: Vec<_> = view.links().into_iter().filter(|e| e.is_external()).collect();
        assert_eq!(external.len(), 1, "only the contact button leaves the site");
        for entry in external {
            let attrs = entry.anchor_attributes();
            assert!(attrs.contains(&("target", "_blank")), "{} missing target", entry.label);
            assert!(
                attrs.contains(&("rel", "noopener noreferrer")),
                "{} missing rel",
                entry.label
            );
        }
    }

    #[test]
    fn test_two_column_layout() {
        let ViewNode::Block { class, children } = landing_view() else {
            panic!("root should be a layout block");
        };
        assert_eq!(class, "landing-grid");
        assert_eq!(children.len(), 2);
        assert!(matches!(
            children[0].clone(),
            ViewNode::Block { class: "landing-column simulation-column", .. }
        ));
    }

    #[test]
    fn test_intro_names_the_team() {
        let view = landing_view();
        let strong = view.count(|n| match n {
            ViewNode::Paragraph { runs, .. } => runs.contains(&Inline::Strong("Monash DeepNeuron")),
            _ => false,
        });
        assert_eq!(strong, 1);
    }
}
