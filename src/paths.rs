//! URL builders for the routes mounted in [`crate::router`].

pub const HOME: &str = "/";
pub const MOVIE_LIST: &str = "/movies/";
pub const MOVIE_DETAIL: &str = "/movie/{id}/";
pub const SEARCH: &str = "/search/";

pub fn movie_detail(id: i32) -> String {
    format!("/movie/{id}/")
}

pub fn search(genre: &str) -> String {
    format!("{SEARCH}?genre={}", urlencoding::encode(genre))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_reverse_to_expected_urls() {
        assert_eq!(HOME, "/");
        assert_eq!(MOVIE_LIST, "/movies/");
        assert_eq!(SEARCH, "/search/");
        assert_eq!(movie_detail(42), "/movie/42/");
    }

    #[test]
    fn search_link_encodes_term() {
        assert_eq!(search("Sci-Fi"), "/search/?genre=Sci-Fi");
        assert_eq!(search("Rom Com & more"), "/search/?genre=Rom%20Com%20%26%20more");
    }
}
