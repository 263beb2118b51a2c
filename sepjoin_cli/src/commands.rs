crate::clap_utils::mk_subcommand! {
    about: "Render sequences with a delimiter between adjacent elements",
    Join => join,
    Compare => compare,
    Generate => generate,
}
