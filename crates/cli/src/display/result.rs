use robotrun_core::InvocationResult;

pub fn print_result(result: &InvocationResult) {
    println!("▶️  Request:");
    for line in result.request_trace().lines() {
        println!("   {line}");
    }
    println!("{}", "=".repeat(80));
    println!("{}", result.response_trace());
    println!("{}", "=".repeat(80));

    let marker = if result.succeeded() { "✅" } else { "❌" };
    println!(
        "{marker} Status: {} ({} ms)",
        result.status_code(),
        result.duration().as_millis()
    );
}
