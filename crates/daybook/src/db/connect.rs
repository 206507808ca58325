use daybook_core::{driver::Connection, Error, Result};

use url::Url;

/// Dispatches on the URL scheme to the matching driver.
pub(crate) async fn connect(url: &str) -> Result<Box<dyn Connection>> {
    let url = Url::parse(url).map_err(Error::driver)?;

    match url.scheme() {
        "mysql" => connect_mysql(&url).await,
        scheme => Err(daybook_core::err!(
            "unsupported database; scheme={scheme}; url={url}"
        )),
    }
}

#[cfg(feature = "mysql")]
async fn connect_mysql(url: &Url) -> Result<Box<dyn Connection>> {
    let driver = daybook_driver_mysql::MySQL::new(url.as_str())?;
    let connection = driver.connect().await?;
    Ok(Box::new(connection))
}

#[cfg(not(feature = "mysql"))]
async fn connect_mysql(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(daybook_core::err!("`mysql` feature not enabled"))
}
