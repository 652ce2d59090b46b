use super::model::Track;

/// Distinct artist names in order of first appearance in `catalog`.
pub fn artists(catalog: &[Track]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for track in catalog {
        if !out.iter().any(|a| a == &track.artist) {
            out.push(track.artist.clone());
        }
    }
    out
}

/// The ordered subsequence of `catalog` whose artist equals `artist` exactly.
pub fn filter_by_artist(catalog: &[Track], artist: &str) -> Vec<Track> {
    catalog
        .iter()
        .filter(|t| t.artist == artist)
        .cloned()
        .collect()
}
