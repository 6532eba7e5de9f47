//! Basic usage example for decision-tree-core
//!
//! Run with: cargo run --example basic_usage

use decision_tree_core::{DecisionError, DecisionNode, Outcome, Value};
use serde_json::json;

type Node = DecisionNode<Value, Value>;
type Out = Outcome<Value, Value>;

fn main() -> anyhow::Result<()> {
    println!("=== Decision Tree Core Basic Usage Example ===\n");

    // Example 1: Constant node
    println!("1. Constant Node:");
    let approve = Node::constant(Value::from("approve"));
    println!("   Result: {:?}\n", approve.evaluate(&Value::Null)?);

    // Example 2: Branching on an input field (age >= 18)
    println!("2. Branching Node:");
    let reject = Node::constant(Value::from("reject"));
    let adult_check = {
        let approve = approve.clone();
        Node::new(move |obj: &Value| {
            let age = obj.get_path(&["user", "age"]).and_then(Value::as_f64);
            if age.unwrap_or(0.0) >= 18.0 {
                approve.clone()
            } else {
                reject.clone()
            }
        })
    };
    for age in [30, 12] {
        let input = Value::from(json!({"user": {"age": age}}));
        println!("   age {} => {:?}", age, adult_check.evaluate(&input)?);
    }
    println!();

    // Example 3: Deferred value
    println!("3. Deferred Value:");
    let deferred = Node::new(|_: &Value| Out::deferred(|| Value::from("computed on demand")));
    println!("   Result: {:?}\n", deferred.evaluate(&Value::Null)?);

    // Example 4: Failure signal
    println!("4. Failure Signal:");
    let strict = Node::new(|obj: &Value| -> Result<Out, DecisionError> {
        let amount = obj.field("amount")?;
        Ok(Out::Value(amount.clone()))
    });
    match strict.evaluate(&Value::object()) {
        Ok(value) => println!("   Unexpected value: {:?}\n", value),
        Err(err) => println!("   Failed: {}\n", err),
    }

    println!("=== Example Complete ===");
    Ok(())
}
