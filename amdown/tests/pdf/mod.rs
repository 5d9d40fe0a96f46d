#[cfg(all(unix, feature = "native-export"))]
mod chrome_stub;
