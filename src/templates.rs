use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{paths, store::Movie};

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }
header { background: #1f2937; padding: 1rem 2rem; }
header a { color: #f9fafb; margin-right: 1.5rem; text-decoration: none; font-weight: 600; }
main { max-width: 48rem; margin: 0 auto; padding: 2rem; }
.card { background: #fff; border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 1.5rem; margin-bottom: 1rem; }
.genre { display: inline-block; background: #e0e7ff; color: #3730a3; border-radius: 9999px; padding: 0.1rem 0.6rem; font-size: 0.85rem; }
.muted { color: #6b7280; }
form.search input { padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.375rem; }
form.search button { padding: 0.5rem 1rem; background: #2563eb; color: #fff; border: 0; border-radius: 0.375rem; }
"#;

pub fn home_page(site_title: &str) -> String {
    page(
        site_title,
        site_title,
        html! {
            div class="card" {
                h1 { "Welcome to " (site_title) }
                p class="muted" { "Browse the catalog or look up movies by genre." }
                p {
                    a href=(paths::MOVIE_LIST) { "Browse all movies" }
                    " · "
                    a href=(paths::SEARCH) { "Search by genre" }
                }
            }
        },
    )
}

pub fn movie_list_page(site_title: &str, movies: &[Movie]) -> String {
    page(
        &format!("All movies · {site_title}"),
        site_title,
        html! {
            h1 { "All movies" }
            @if movies.is_empty() {
                div class="card" { p class="muted" { "No movies in the catalog yet." } }
            } @else {
                @for movie in movies {
                    (movie_card(movie))
                }
            }
        },
    )
}

pub fn movie_detail_page(site_title: &str, movie: &Movie) -> String {
    page(
        &format!("{movie} · {site_title}"),
        site_title,
        html! {
            div class="card" {
                h1 { (movie.name) }
                span class="genre" { (movie.genre) }
                @match movie.description.as_deref().filter(|d| !d.is_empty()) {
                    Some(description) => { p { (description) } },
                    None => { p class="muted" { "No description." } },
                }
                @if let Some(updated) = movie.updated_at() {
                    p class="muted" { "Last updated " (format_timestamp(updated)) }
                }
            }
            a href=(paths::MOVIE_LIST) { "Back to all movies" }
        },
    )
}

pub fn movie_search_page(site_title: &str, term: &str, movies: &[Movie]) -> String {
    page(
        &format!("Search · {site_title}"),
        site_title,
        html! {
            h1 { "Search by genre" }
            form class="search" method="get" action=(paths::SEARCH) {
                input type="text" name="genre" value=(term) placeholder="e.g. Drama" maxlength="200";
                " "
                button type="submit" { "Search" }
            }
            @if term.is_empty() {
                p class="muted" { "Enter a genre to search." }
            } @else if movies.is_empty() {
                p class="muted" { "No movies found for \"" (term) "\"." }
            } @else {
                p class="muted" { (format!("{} result(s) for \"{term}\"", movies.len())) }
                @for movie in movies {
                    (movie_card(movie))
                }
            }
        },
    )
}

pub fn not_found_page() -> String {
    page(
        "Not found",
        "",
        html! {
            div class="card" {
                h1 { "Not found" }
                p class="muted" { "The page or movie you asked for does not exist." }
                a href=(paths::HOME) { "Home" }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        "",
        html! {
            div class="card" {
                h1 { "Error" }
                p { (message) }
                a href=(paths::HOME) { "Back" }
            }
        },
    )
}

fn page(title: &str, brand: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    a href=(paths::HOME) { @if brand.is_empty() { "Home" } @else { (brand) } }
                    a href=(paths::MOVIE_LIST) { "Movies" }
                    a href=(paths::SEARCH) { "Search" }
                }
                main { (body) }
            }
        }
    }
    .into_string()
}

fn movie_card(movie: &Movie) -> Markup {
    html! {
        div class="card" {
            h2 { a href=(paths::movie_detail(movie.id)) { (movie.name) } }
            a class="genre" href=(paths::search(&movie.genre)) { (movie.genre) }
        }
    }
}

fn format_timestamp(ts: jiff::Timestamp) -> String {
    ts.strftime("%Y-%m-%d %H:%M UTC").to_string()
}
