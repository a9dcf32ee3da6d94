use askama::Template;

pub struct ServerView {
    pub name: String,
    pub html: String,
}

pub struct GameView {
    pub name: String,
    pub servers: Vec<ServerView>,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub title: &'a str,
    pub games: Vec<GameView>,
    pub generated_date: String,
}

/// Page chrome with empty `generated-date` and `content` targets, filled in by
/// the browser render script.
#[derive(Template)]
#[template(path = "client.html")]
pub struct ClientShell<'a> {
    pub title: &'a str,
    pub render_script: &'a str,
}
