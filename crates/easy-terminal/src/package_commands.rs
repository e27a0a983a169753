//! Package management commands for the Python and Node ecosystems.
//!
//! All six verbs share one implementation parameterised by ecosystem and
//! action; the actual manager invocation lives behind `PackageService`.

use easy_platform::{Ecosystem, PackageAction};
use easy_types::error::Result;

use crate::interpreter::{Arity, Command, CommandOutput, Environment, Verb};

struct PackageCmd {
    verb: Verb,
    ecosystem: Ecosystem,
    action: PackageAction,
    description: &'static str,
    usage: &'static str,
    category: &'static str,
}

impl Command for PackageCmd {
    fn verb(&self) -> Verb {
        self.verb
    }
    fn description(&self) -> &str {
        self.description
    }
    fn usage(&self) -> &str {
        self.usage
    }
    fn category(&self) -> &str {
        self.category
    }
    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let package = args[0];
        env.packages.run(self.ecosystem, self.action, package)?;
        Ok(CommandOutput::Text(format!(
            "{} package '{package}' {} successfully.",
            self.ecosystem.label(),
            self.action.past()
        )))
    }
}

fn package_cmd(
    verb: Verb,
    ecosystem: Ecosystem,
    action: PackageAction,
    description: &'static str,
    usage: &'static str,
) -> Box<PackageCmd> {
    let category = match ecosystem {
        Ecosystem::Python => "Python Package Management",
        Ecosystem::Node => "Node Package Management",
    };
    Box::new(PackageCmd {
        verb,
        ecosystem,
        action,
        description,
        usage,
        category,
    })
}

/// Register the Python and Node package commands.
pub fn register_package_commands(reg: &mut crate::CommandRegistry) {
    use Ecosystem::{Node, Python};
    use PackageAction::{Install, Remove, Update};

    reg.register(package_cmd(
        Verb::GetIt,
        Python,
        Install,
        "Install a Python package",
        "get-it [package]",
    ));
    reg.register(package_cmd(
        Verb::UpdateIt,
        Python,
        Update,
        "Update a Python package",
        "update-it [package]",
    ));
    reg.register(package_cmd(
        Verb::DropIt,
        Python,
        Remove,
        "Remove a Python package",
        "drop-it [package]",
    ));
    reg.register(package_cmd(
        Verb::AddIt,
        Node,
        Install,
        "Install a Node package",
        "add-it [package]",
    ));
    reg.register(package_cmd(
        Verb::UpgradeIt,
        Node,
        Update,
        "Update a Node package",
        "upgrade-it [package]",
    ));
    reg.register(package_cmd(
        Verb::RmIt,
        Node,
        Remove,
        "Remove a Node package",
        "rm-it [package]",
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Call, FakePlatform};
    use crate::{CommandRegistry, Dispatch};
    use easy_types::config::ShellConfig;
    use easy_types::error::ErrorKind;

    fn exec(platform: &FakePlatform, line: &str) -> Result<CommandOutput> {
        let mut reg = CommandRegistry::new();
        register_package_commands(&mut reg);
        let config = ShellConfig::default();
        let env = Environment::new(&config, platform);
        match reg.dispatch(line, &env) {
            Dispatch::Completed(result) => result,
            other => panic!("unexpected dispatch: {other:?}"),
        }
    }

    fn text(result: Result<CommandOutput>) -> String {
        match result.unwrap() {
            CommandOutput::Text(s) => s,
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn each_verb_maps_to_ecosystem_and_action() {
        let cases = [
            ("get-it", Ecosystem::Python, PackageAction::Install),
            ("update-it", Ecosystem::Python, PackageAction::Update),
            ("drop-it", Ecosystem::Python, PackageAction::Remove),
            ("add-it", Ecosystem::Node, PackageAction::Install),
            ("upgrade-it", Ecosystem::Node, PackageAction::Update),
            ("rm-it", Ecosystem::Node, PackageAction::Remove),
        ];
        for (verb, ecosystem, action) in cases {
            let platform = FakePlatform::new();
            exec(&platform, &format!("{verb} leftpad")).unwrap();
            assert_eq!(
                platform.calls(),
                [Call::Package(ecosystem, action, "leftpad".into())],
                "{verb}"
            );
        }
    }

    #[test]
    fn success_messages() {
        let platform = FakePlatform::new();
        assert_eq!(
            text(exec(&platform, "get-it requests")),
            "Python package 'requests' installed successfully."
        );
        assert_eq!(
            text(exec(&platform, "upgrade-it express")),
            "Node package 'express' updated successfully."
        );
        assert_eq!(
            text(exec(&platform, "drop-it requests")),
            "Python package 'requests' removed successfully."
        );
    }

    #[test]
    fn failure_embeds_reason() {
        let mut platform = FakePlatform::new();
        platform.package_error = Some("`npm uninstall ghost` exit status: 1".into());
        let err = exec(&platform, "rm-it ghost").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Collaborator);
        assert_eq!(
            format!("{err}"),
            "Error removing Node package 'ghost': `npm uninstall ghost` exit status: 1"
        );
    }

    #[test]
    fn categories_follow_ecosystem() {
        let mut reg = CommandRegistry::new();
        register_package_commands(&mut reg);
        let help = reg.help_text();
        let python = help.find("Python Package Management").unwrap();
        let node = help.find("Node Package Management").unwrap();
        assert!(python < help.find("- get-it").unwrap());
        assert!(node < help.find("- add-it").unwrap());
        assert!(help.find("- rm-it").unwrap() > node);
    }

    #[test]
    fn missing_package_is_usage_error() {
        let platform = FakePlatform::new();
        assert_eq!(
            format!("{}", exec(&platform, "get-it").unwrap_err()),
            "Usage: get-it [package]"
        );
        assert!(exec(&platform, "add-it a b").is_err());
        assert!(platform.calls().is_empty());
    }
}
