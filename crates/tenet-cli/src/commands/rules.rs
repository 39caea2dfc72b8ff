use tenet_output::OutputFormatter;
use tenet_rules::registry::RuleRegistry;

/// Run `tenet rules` — list the registered rules in registration order.
pub fn run(formatter: &dyn OutputFormatter) -> i32 {
    let registry = RuleRegistry::builtin();
    print!("{}", formatter.format_rules(&registry.infos()));
    0
}
