use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// A reader over the file at `path`, or over standard input if there is no path.
///
/// Files with an `xz` extension are decompressed, if support for xz is enabled.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdin().lock()));
    };

    let file = File::open(path)?;

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => Ok(Box::new(BufReader::new(
            xz2::read::XzDecoder::new(file),
        ))),

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "xz compressed input requires the xz feature",
        )),

        _ => Ok(Box::new(BufReader::new(file))),
    }
}
