//! A document review workflow: authors submit drafts, editors publish
//! and archive them. Run with `cargo run --example document_review`.

use trellis::builder::WorkflowBuilder;
use trellis::core::{Action, ConstraintError, Guard, StatefulEntity};
use trellis::workflow::Workflow;
use trellis::workflow_states;

workflow_states! {
    pub enum DocumentState {
        Draft,
        Submitted,
        Published,
    }
}

#[derive(Default)]
struct Document {
    state: Option<String>,
    title: String,
}

impl StatefulEntity for Document {
    fn workflow_state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    fn set_workflow_state(&mut self, identifier: &str) {
        self.state = Some(identifier.to_string());
    }
}

struct Session {
    user: &'static str,
    role: &'static str,
}

fn role_is(expected: &'static str) -> Guard<Document, Session> {
    Guard::new(move |_: &Document, session: &Session| {
        if session.role == expected {
            Ok(())
        } else {
            Err(ConstraintError::new(
                "wrong-role",
                format!("'{}' requires role '{expected}'", session.user),
            ))
        }
    })
}

fn build_workflow() -> Workflow<DocumentState, Document, Session> {
    WorkflowBuilder::new()
        .default_state(DocumentState::Draft)
        .transition(
            Action::new("submit").trigger(|doc: &mut Document, session: &Session| {
                println!("  [trigger] '{}' submitted by {}", doc.title, session.user);
                Ok(())
            }),
            DocumentState::Draft,
            DocumentState::Submitted,
        )
        .transition(
            Action::new("publish")
                .constraint(role_is("editor"))
                .trigger(|doc: &mut Document, _: &Session| {
                    println!("  [trigger] '{}' went live", doc.title);
                    Ok(())
                }),
            DocumentState::Submitted,
            DocumentState::Published,
        )
        .transition(
            Action::new("reject"),
            DocumentState::Submitted,
            DocumentState::Draft,
        )
        .build()
        .expect("workflow definition is valid")
}

fn main() {
    let workflow = build_workflow();

    let mut doc = Document {
        state: None,
        title: "Guarded transitions in practice".to_string(),
    };

    let author = Session {
        user: "ana",
        role: "author",
    };
    let editor = Session {
        user: "eli",
        role: "editor",
    };

    {
        let mut item = workflow.bind(&mut doc, &author);
        println!("state: {:?}", item.current_state().unwrap());
        item.commit("Submitted").unwrap();
        println!("state: {:?}", item.current_state().unwrap());

        // Authors cannot publish.
        match item.commit("Published") {
            Err(error) => println!("author publish rejected: {error}"),
            Ok(()) => unreachable!(),
        }
    }

    {
        let mut item = workflow.bind(&mut doc, &editor);
        let available: Vec<&str> = item
            .available_transitions()
            .unwrap()
            .iter()
            .map(|t| t.action().identifier())
            .collect();
        println!("editor can: {available:?}");

        item.commit("Published").unwrap();
        println!("state: {:?}", item.current_state().unwrap());
    }
}
