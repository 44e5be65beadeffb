#[cfg(target_arch = "wasm32")]
fn main() {
    memberhub_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("memberhub-frontend targets wasm32; build it with trunk");
}
