use biocalc::cli;
use lazy_static::lazy_static;
use std::ffi::OsString;

lazy_static! {
    static ref COMMAND: clap::Command<'static> = cli::build::build().no_binary_name(true);
}

#[macro_export]
macro_rules! def_test {
    (fn $name:ident [$($arg:expr),* $(,)?]) => {
        #[test]
        fn $name() {
            common::run([$($arg),*]);
        }
    };
    (#[should_panic] fn $name:ident [$($arg:expr),* $(,)?]) => {
        #[test]
        #[should_panic]
        fn $name() {
            common::run([$($arg),*]);
        }
    };
}

pub fn run<I, T>(args: I)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    cli::run::run_with_args(COMMAND.clone().get_matches_from(args));
}

pub fn try_parse<I, T>(args: I) -> clap::Result<clap::ArgMatches>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    COMMAND.clone().try_get_matches_from(args)
}
