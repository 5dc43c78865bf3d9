use shelfmark_core::Genre;

pub fn list_genres() {
    for genre in Genre::ALL {
        println!("{}", genre);
    }
}
