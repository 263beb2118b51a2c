/// Declare subcommand modules together with the `Args` parser and `run` dispatcher for them
macro_rules! mk_subcommand {
    (about: $about:literal, $($variant:ident => $module:ident),* $(,)?) => {
        $(mod $module;)*

        #[derive(::clap::Subcommand, Debug)]
        pub enum Command {
            $($variant($module::Args),)*
        }

        #[derive(::clap::Parser, Debug)]
        #[command(version, about = $about)]
        pub struct Args {
            #[clap(subcommand)]
            command: Command,
        }

        pub fn run(args: Args) -> ::anyhow::Result<()> {
            match args.command {
                $(Command::$variant(args) => {
                    ::log::debug!("Running {}", stringify!($module));
                    $module::run(args)
                })*
            }
        }
    };
}

pub(crate) use mk_subcommand;
