//! Version command implementation.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!("rolewright {VERSION}");
    println!();
    println!("Role configuration validation and IAM role building.");
    println!();
    println!("Role types: {}", role_types());
    println!("Target:     {}", std::env::consts::ARCH);
    println!("OS:         {}", std::env::consts::OS);
}

fn role_types() -> String {
    rolewright::RoleType::ALL
        .iter()
        .map(rolewright::RoleType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
