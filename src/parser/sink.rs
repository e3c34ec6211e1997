//! Replays the event stream into a rowan green tree
//!
//! Trivia is not part of the event stream. The sink attaches it to the
//! following significant token: whitespace and comments in front of a node
//! land before that node's `Start`, and whatever is left at the end of the
//! input goes into the root before it closes.

use std::mem;

use rowan::{GreenNode, GreenNodeBuilder};

use super::event::Event;
use super::lexer::Token;
use super::syntax_kind::SyntaxKind;

pub(crate) struct TreeSink<'t> {
    tokens: &'t [Token<'t>],
    cursor: usize,
    depth: usize,
    builder: GreenNodeBuilder<'static>,
}

impl<'t> TreeSink<'t> {
    pub(crate) fn new(tokens: &'t [Token<'t>]) -> Self {
        Self {
            tokens,
            cursor: 0,
            depth: 0,
            builder: GreenNodeBuilder::new(),
        }
    }

    pub(crate) fn build(mut self, mut events: Vec<Event>) -> GreenNode {
        for idx in 0..events.len() {
            match mem::replace(&mut events[idx], Event::tombstone()) {
                Event::Start {
                    kind: SyntaxKind::TOMBSTONE,
                    forward_parent: None,
                } => {}
                Event::Start {
                    kind,
                    forward_parent,
                } => {
                    // Collect the chain of parents attached with `precede`;
                    // the outermost one is opened first.
                    let mut kinds = vec![kind];
                    let mut parent_idx = idx;
                    let mut next = forward_parent;
                    while let Some(distance) = next {
                        parent_idx += distance as usize;
                        next = match mem::replace(&mut events[parent_idx], Event::tombstone()) {
                            Event::Start {
                                kind,
                                forward_parent,
                            } => {
                                kinds.push(kind);
                                forward_parent
                            }
                            _ => unreachable!("forward parent must point at a start event"),
                        };
                    }
                    for kind in kinds.into_iter().rev() {
                        if kind != SyntaxKind::TOMBSTONE {
                            self.start_node(kind);
                        }
                    }
                }
                Event::Token => self.token(),
                Event::Finish => self.finish_node(),
            }
        }
        self.builder.finish()
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        if self.depth > 0 {
            self.eat_trivia();
        }
        self.builder.start_node(kind.into());
        self.depth += 1;
    }

    fn finish_node(&mut self) {
        if self.depth == 1 {
            // Closing the root: nothing may be left behind
            while let Some(token) = self.tokens.get(self.cursor) {
                if token.kind != SyntaxKind::EOF {
                    self.builder.token(token.kind.into(), token.text);
                }
                self.cursor += 1;
            }
        }
        self.builder.finish_node();
        self.depth = self.depth.saturating_sub(1);
    }

    fn token(&mut self) {
        self.eat_trivia();
        if let Some(token) = self.tokens.get(self.cursor) {
            if token.kind != SyntaxKind::EOF {
                self.builder.token(token.kind.into(), token.text);
            }
            self.cursor += 1;
        }
    }

    fn eat_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), token.text);
            self.cursor += 1;
        }
    }
}
