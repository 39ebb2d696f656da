use serde::Serializer;
use surrealdb::sql::Thing;

pub const USER_TABLE: &str = "user";
pub const SONG_TABLE: &str = "song";
pub const LYRICS_TABLE: &str = "song_lyrics";
pub const FAVORITE_TABLE: &str = "favorite";
pub const EDIT_SUGGESTION_TABLE: &str = "edit_suggestion";

/// Strips a `table:` prefix if the caller passed a full record id.
pub fn parse_id_part(id: &str) -> &str {
    if let Some((_, id_part)) = id.split_once(':') {
        id_part
    } else {
        id
    }
}

fn create_thing(table: &str, id: &str) -> Thing {
    Thing::from((table.to_string(), parse_id_part(id).to_string()))
}

/// User ids are the identity provider's subject and are taken verbatim.
pub fn create_user_thing(user_id: &str) -> Thing {
    Thing::from((USER_TABLE.to_string(), user_id.to_string()))
}

pub fn create_song_thing(song_id: &str) -> Thing {
    create_thing(SONG_TABLE, song_id)
}

pub fn create_lyrics_thing(lyrics_id: &str) -> Thing {
    create_thing(LYRICS_TABLE, lyrics_id)
}

pub fn create_edit_suggestion_thing(suggestion_id: &str) -> Thing {
    create_thing(EDIT_SUGGESTION_TABLE, suggestion_id)
}

/// Bare record key, without table prefix or escaping brackets.
pub fn thing_to_id(thing: &Thing) -> String {
    thing.id.to_raw()
}

pub fn serialize_id<S>(thing: &Thing, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&thing_to_id(thing))
}

pub fn serialize_opt_id<S>(thing: &Option<Thing>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match thing {
        Some(thing) => serializer.serialize_some(&thing_to_id(thing)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_part() {
        assert_eq!(parse_id_part("user:123"), "123");
        assert_eq!(parse_id_part("123"), "123");
        assert_eq!(parse_id_part("song:amazing_grace"), "amazing_grace");
    }

    #[test]
    fn test_create_things() {
        let user_thing = create_user_thing("12");
        assert_eq!(user_thing.tb, "user");
        assert_eq!(thing_to_id(&user_thing), "12");

        let provider_thing = create_user_thing("oidc:4471");
        assert_eq!(thing_to_id(&provider_thing), "oidc:4471");

        let song_thing = create_song_thing("56");
        assert_eq!(song_thing.tb, "song");
        assert_eq!(thing_to_id(&song_thing), "56");

        let lyrics_thing = create_lyrics_thing("song_lyrics:ab");
        assert_eq!(lyrics_thing.tb, "song_lyrics");
        assert_eq!(thing_to_id(&lyrics_thing), "ab");

        let suggestion_thing = create_edit_suggestion_thing("x9");
        assert_eq!(suggestion_thing.tb, "edit_suggestion");
    }

    #[test]
    fn test_serialize_ids_as_bare_keys() {
        #[derive(serde::Serialize)]
        struct Row {
            #[serde(serialize_with = "serialize_id")]
            id: Thing,
            #[serde(serialize_with = "serialize_opt_id")]
            owner: Option<Thing>,
        }

        let row = Row {
            id: create_song_thing("abc"),
            owner: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["id"], "abc");
        assert!(json["owner"].is_null());
    }
}
