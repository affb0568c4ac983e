use indicatif::ProgressBar;
use log::debug;
use std::{
    fs::{File, OpenOptions},
    io::{self, Read, Seek, SeekFrom, Write},
    path::Path,
};

use crate::error::ScaffoldError;
use crate::progressbar;
use crate::progressbar::spinner;

/// Rewrite `token` to `value` in each file, in order.
/// Returns the total number of replaced occurrences.
pub fn substitute_all(files: &[&Path], token: &str, value: &str) -> Result<usize, ScaffoldError> {
    let mp = progressbar::new();
    let spinner_style = spinner();

    let total = files.len().to_string();
    let mut replaced = 0;
    for (progress, file) in files.iter().enumerate() {
        let pb = mp.add(ProgressBar::new(50));
        pb.set_style(spinner_style.clone());
        pb.set_prefix(format!(
            "[{:width$}/{}]",
            progress + 1,
            total,
            width = total.len()
        ));
        pb.set_message(format!("Renaming: {}", file.display()));

        let count = replace_in_file(file, token, value)?;
        debug!("{count} occurrence(s) of `{token}` replaced in {}", file.display());
        replaced += count;

        pb.finish_with_message(format!("Done: {}", file.display()));
    }
    Ok(replaced)
}

/// Replace every occurrence of `token` in the file at `path`, rewriting it
/// in place through a single handle.
pub fn replace_in_file(path: &Path, token: &str, value: &str) -> Result<usize, ScaffoldError> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| ScaffoldError::io("open", path, e))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| ScaffoldError::io("read", path, e))?;

    let (rewritten, count) = replace_by_line(&content, token, value);

    let rewrite = |file: &mut File| -> io::Result<()> {
        file.seek(SeekFrom::Start(0))?;
        file.write_all(rewritten.as_bytes())?;
        file.set_len(rewritten.len() as u64)
    };
    rewrite(&mut file).map_err(|e| ScaffoldError::io("write", path, e))?;
    Ok(count)
}

/// Line-wise replacement: each line keeps its terminator and an occurrence
/// split across a line break is not matched.
pub fn replace_by_line(content: &str, token: &str, value: &str) -> (String, usize) {
    let mut count = 0;
    let mut out = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let hits = line.matches(token).count();
        if hits == 0 {
            out.push_str(line);
        } else {
            count += hits;
            out.push_str(&line.replace(token, value));
        }
    }
    (out, count)
}
