fn main() {
    multiversx_sc_meta_lib::cli_main::<coordinates_voting::AbiProvider>();
}
