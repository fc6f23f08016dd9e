use sprig_core::util::progress_percent;

pub fn format_progress(completed: u32, all: u32) -> String {
    format!("{}%", progress_percent(completed, all))
}

pub fn run_progress(completed: u32, all: u32) {
    println!("{}", format_progress(completed, all));
}
