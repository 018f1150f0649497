use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    #[arg(
        long,
        help = "Print the patched plan to stdout instead of rewriting the file",
        default_value_t = false
    )]
    pub dry_run: bool,

    #[arg(
        long,
        help = "Print the generated step schedule after patching",
        default_value_t = false
    )]
    pub stats: bool,

    #[arg(
        short = 'q',
        long,
        help = "Suppress the summary line",
        default_value_t = false
    )]
    pub quiet: bool,
}
