// BiasViz - GPL-3.0-or-later
// This file is part of BiasViz.
//
// Copyright (C) 2025 BiasViz Authors
//
// BiasViz is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// BiasViz is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with BiasViz.  If not, see <https://www.gnu.org/licenses/>.

//! Hash-based share links: `{origin}/#{id}`.

/// Build a share link for a dataset or comparison id
pub fn share_link(origin: &str, id: &str) -> String {
    format!("{}/#{id}", origin.trim_end_matches('/'))
}

/// Extract the id from a share link or a bare id.
///
/// Everything after the last `#` is the id. Input without a `#` is taken
/// as the id itself, minus any leading `/`.
pub fn fragment_id(input: &str) -> Option<String> {
    let input = input.trim();
    let candidate = match input.rsplit_once('#') {
        Some((_, fragment)) => fragment,
        None => input.trim_start_matches('/'),
    };
    let candidate = candidate.trim();
    if candidate.is_empty() {
        None
    } else {
        Some(candidate.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_link() {
        assert_eq!(
            share_link("http://localhost:5173", "abc-123"),
            "http://localhost:5173/#abc-123"
        );
        assert_eq!(share_link("https://bias.example/", "x"), "https://bias.example/#x");
    }

    #[test]
    fn test_fragment_id_from_link() {
        assert_eq!(
            fragment_id("http://localhost:5173/#abc-123"),
            Some("abc-123".to_string())
        );
        assert_eq!(fragment_id("  #id \n"), Some("id".to_string()));
    }

    #[test]
    fn test_fragment_id_bare() {
        assert_eq!(fragment_id("abc"), Some("abc".to_string()));
        assert_eq!(fragment_id("/abc"), Some("abc".to_string()));
    }

    #[test]
    fn test_fragment_id_empty() {
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("http://localhost:5173/#"), None);
        assert_eq!(fragment_id("   "), None);
    }

    #[test]
    fn test_link_round_trip() {
        let link = share_link("http://host", "d1");
        assert_eq!(fragment_id(&link).as_deref(), Some("d1"));
    }
}
