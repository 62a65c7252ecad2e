//! Retrieves information about the version of the engine from Git and the build
//! environment so it can be reported at runtime.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
