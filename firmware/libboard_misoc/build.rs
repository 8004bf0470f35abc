extern crate build_misoc;

fn main() {
    let generated = build_misoc::generated_dir("sayma_amc");
    build_misoc::cfg(&generated);
    build_misoc::stage(&generated, &["csr.rs", "mem.rs"]);
}
