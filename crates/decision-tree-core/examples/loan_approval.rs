//! Loan approval decided by a chain of nodes sharing a context
//!
//! Each stage narrows the application with its own adapter, records what it
//! found in the shared context and hands over to the next stage.
//!
//! Run with: RUST_LOG=decision_tree_core=trace cargo run --example loan_approval

use decision_tree_core::{DecisionError, DecisionNode, Outcome};

#[derive(Debug, Clone)]
struct Applicant {
    age: u32,
    annual_income: f64,
}

#[derive(Debug, Clone)]
struct Application {
    applicant: Applicant,
    amount: f64,
}

/// Notes collected while the application moves through the chain
#[derive(Debug, Default)]
struct Review {
    debt_ratio: Option<f64>,
    notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Verdict {
    Approved { rate: f64 },
    Referred(String),
}

type Stage = DecisionNode<Application, Verdict, DecisionError, Review>;
type StageOutcome = Outcome<Application, Verdict, DecisionError, Review>;

fn build_chain() -> Stage {
    let pricing = Stage::with_context(|_: &Application, review: &mut Review| {
        let ratio = review.debt_ratio.unwrap_or(1.0);
        let rate = if ratio < 0.2 { 0.045 } else { 0.065 };
        review.notes.push(format!("priced at {:.1}%", rate * 100.0));
        StageOutcome::Value(Verdict::Approved { rate })
    });

    let affordability = Stage::adapted_with_context(
        |app: &Application| app.amount / app.applicant.annual_income,
        move |ratio: f64, review: &mut Review| {
            review.debt_ratio = Some(ratio);
            review.notes.push(format!("debt ratio {:.2}", ratio));
            if ratio > 0.5 {
                StageOutcome::deferred(move || {
                    Verdict::Referred(format!("debt ratio {:.2} needs manual review", ratio))
                })
            } else {
                StageOutcome::delegate(&pricing)
            }
        },
    );

    Stage::adapted_with_context(
        |app: &Application| app.applicant.clone(),
        move |applicant: Applicant, review: &mut Review| {
            if applicant.age < 18 {
                return StageOutcome::Fail(DecisionError::failed("applicant is under 18"));
            }
            review.notes.push("eligible".to_string());
            StageOutcome::delegate(&affordability)
        },
    )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let chain = build_chain();

    let applications = [
        Application {
            applicant: Applicant {
                age: 34,
                annual_income: 90_000.0,
            },
            amount: 12_000.0,
        },
        Application {
            applicant: Applicant {
                age: 41,
                annual_income: 40_000.0,
            },
            amount: 35_000.0,
        },
        Application {
            applicant: Applicant {
                age: 17,
                annual_income: 5_000.0,
            },
            amount: 1_000.0,
        },
    ];

    for (i, app) in applications.iter().enumerate() {
        let mut review = Review::default();
        match chain.evaluate_with(app, &mut review) {
            Ok(verdict) => tracing::info!(application = i, ?verdict, notes = ?review.notes, "Decided"),
            Err(err) => tracing::warn!(application = i, error = %err, "Rejected"),
        }
    }

    Ok(())
}
