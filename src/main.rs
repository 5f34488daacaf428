use std::sync::Arc;

use serde_json::json;

use capreg::{
    Capability, CapabilityRegistry, FnStrategy, OperationSpec, StrategyDescriptor, ValueKind,
};

fn provider(id: &str, label: &'static str) -> Arc<FnStrategy> {
    Arc::new(FnStrategy::new(
        StrategyDescriptor::new(id).capability("sender").operation("send"),
        move |_op, input| {
            Ok(json!(format!(
                "Sending via {}: {}",
                label,
                input.as_str().unwrap_or("")
            )))
        },
    ))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== capreg: one client, interchangeable senders ===\n");

    let mut registry = CapabilityRegistry::new();
    registry
        .register_capability(Capability::new("sender").operation(
            OperationSpec::new("send", ValueKind::String, ValueKind::String).required(),
        ))
        .expect("Failed to register capability");

    for (id, label) in [("gmail", "Gmail"), ("outlook", "Outlook"), ("yahoo", "Yahoo")] {
        registry
            .register_strategy(provider(id, label))
            .expect("Failed to register strategy");
    }

    // Same client code path for every provider.
    for id in registry.strategies_for("sender") {
        let client = registry.client("sender", &id).expect("Failed to bind client");
        match client.execute(json!("Hello World!")) {
            Ok(output) => println!("[{}] {}", id, output.as_str().unwrap_or_default()),
            Err(error) => println!("[{}] failed: {}", id, error),
        }
    }

    // A strategy that cannot fulfil a contract it claims is rejected up front.
    registry
        .register_capability(
            Capability::new("flyer")
                .operation(OperationSpec::new("fly", ValueKind::Null, ValueKind::String)),
        )
        .expect("Failed to register capability");
    let penguin = Arc::new(FnStrategy::new(
        StrategyDescriptor::new("penguin").capability("flyer").operation("walk"),
        |_op, _input| Ok(json!("Penguin waddling on ice!")),
    ));
    match registry.register_strategy(penguin) {
        Ok(()) => println!("\npenguin registered (unexpected)"),
        Err(error) => println!("\npenguin rejected at registration: {}", error),
    }
}
