/// Static usage text printed by `craftflow help` and after unknown commands.
pub const USAGE: &str = "
Usage: craftflow <command>

Commands:
  init                          Initialize a new project
  create <module-name>          Create a new module with controllers, services, and routes in src/packages/<module-name>
  help                          Display help information
";

pub fn run() {
    println!("{USAGE}");
}
