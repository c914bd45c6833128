//! Defines the shared application view state.

#[derive(Clone, PartialEq)]
pub enum AppView {
    Home,
    Favorites,
    Queue,
    Premium,
    AlbumDetail(u64),
    PlaylistDetail(u64),
    GenreDetail(String),
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Home => "Home",
        AppView::Favorites => "Favorites",
        AppView::Queue => "Queue",
        AppView::Premium => "Premium",
        AppView::AlbumDetail(_) => "Album",
        AppView::PlaylistDetail(_) => "Playlist",
        AppView::GenreDetail(_) => "Genre",
    }
}
