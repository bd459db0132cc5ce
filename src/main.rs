#[cfg(feature = "csr")]
fn main() {
    fibre_reborn::start();
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // nothing to mount outside the browser; see lib.rs for the entry point
}
