use lazy_static::lazy_static;
use url::Url;

pub const CONFIG_PATH: &str = "api/config/";
pub const MOVIES_PATH: &str = "api/movies/";

lazy_static! {
    pub static ref BASE_URL: Url =
        Url::parse("http://localhost:8000").expect("BASE_URL parse failed");
}
