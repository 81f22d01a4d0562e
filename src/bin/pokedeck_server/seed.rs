//! Built-in catalog and starting data for the development server.

use super::*;

/// Size of the national catalog, used for coverage figures.
pub(crate) const NATIONAL_DEX: usize = 1025;

const LEGENDARY: &[i64] = &[144, 145, 146, 150, 151, 249, 250, 384];

// (number, name, generation, types, hp, attack, defense, speed)
type Row = (i64, &'static str, i64, &'static [&'static str], i64, i64, i64, i64);

const ROWS: &[Row] = &[
    (1, "bulbasaur", 1, &["grass", "poison"], 45, 49, 49, 45),
    (2, "ivysaur", 1, &["grass", "poison"], 60, 62, 63, 60),
    (3, "venusaur", 1, &["grass", "poison"], 80, 82, 83, 80),
    (4, "charmander", 1, &["fire"], 39, 52, 43, 65),
    (5, "charmeleon", 1, &["fire"], 58, 64, 58, 80),
    (6, "charizard", 1, &["fire", "flying"], 78, 84, 78, 100),
    (7, "squirtle", 1, &["water"], 44, 48, 65, 43),
    (8, "wartortle", 1, &["water"], 59, 63, 80, 58),
    (9, "blastoise", 1, &["water"], 79, 83, 100, 78),
    (10, "caterpie", 1, &["bug"], 45, 30, 35, 45),
    (12, "butterfree", 1, &["bug", "flying"], 60, 45, 50, 70),
    (16, "pidgey", 1, &["normal", "flying"], 40, 45, 40, 56),
    (19, "rattata", 1, &["normal"], 30, 56, 35, 72),
    (25, "pikachu", 1, &["electric"], 35, 55, 40, 90),
    (26, "raichu", 1, &["electric"], 60, 90, 55, 110),
    (35, "clefairy", 1, &["fairy"], 70, 45, 48, 35),
    (39, "jigglypuff", 1, &["normal", "fairy"], 115, 45, 20, 20),
    (52, "meowth", 1, &["normal"], 40, 45, 35, 90),
    (54, "psyduck", 1, &["water"], 50, 52, 48, 55),
    (63, "abra", 1, &["psychic"], 25, 20, 15, 90),
    (66, "machop", 1, &["fighting"], 70, 80, 50, 35),
    (74, "geodude", 1, &["rock", "ground"], 40, 80, 100, 20),
    (92, "gastly", 1, &["ghost", "poison"], 30, 35, 30, 80),
    (94, "gengar", 1, &["ghost", "poison"], 60, 65, 60, 110),
    (95, "onix", 1, &["rock", "ground"], 35, 45, 160, 70),
    (121, "starmie", 1, &["water", "psychic"], 60, 75, 85, 115),
    (129, "magikarp", 1, &["water"], 20, 10, 55, 80),
    (130, "gyarados", 1, &["water", "flying"], 95, 125, 79, 81),
    (131, "lapras", 1, &["water", "ice"], 130, 85, 80, 60),
    (133, "eevee", 1, &["normal"], 55, 55, 50, 55),
    (143, "snorlax", 1, &["normal"], 160, 110, 65, 30),
    (144, "articuno", 1, &["ice", "flying"], 90, 85, 100, 85),
    (145, "zapdos", 1, &["electric", "flying"], 90, 90, 85, 100),
    (146, "moltres", 1, &["fire", "flying"], 90, 100, 90, 90),
    (149, "dragonite", 1, &["dragon", "flying"], 91, 134, 95, 80),
    (150, "mewtwo", 1, &["psychic"], 106, 110, 90, 130),
    (151, "mew", 1, &["psychic"], 100, 100, 100, 100),
    (152, "chikorita", 2, &["grass"], 45, 49, 65, 45),
    (155, "cyndaquil", 2, &["fire"], 39, 52, 43, 65),
    (158, "totodile", 2, &["water"], 50, 65, 64, 43),
    (249, "lugia", 2, &["psychic", "flying"], 106, 90, 130, 110),
    (250, "ho-oh", 2, &["fire", "flying"], 106, 130, 90, 90),
    (252, "treecko", 3, &["grass"], 40, 45, 35, 70),
    (255, "torchic", 3, &["fire"], 45, 60, 40, 45),
    (258, "mudkip", 3, &["water"], 50, 70, 50, 40),
    (384, "rayquaza", 3, &["dragon", "flying"], 105, 150, 90, 95),
];

pub(crate) fn dataset() -> Vec<CatalogEntry> {
    ROWS.iter()
        .map(
            |&(id, name, generation, types, hp, attack, defense, speed)| CatalogEntry {
                id,
                name: name.to_string(),
                image_url: format!(
                    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{}.png",
                    id
                ),
                types: types.iter().map(|t| t.to_string()).collect(),
                generation,
                hp,
                attack,
                defense,
                speed,
            },
        )
        .collect()
}

pub(crate) fn rarity_for(entry: &CatalogEntry) -> Rarity {
    if LEGENDARY.contains(&entry.id) {
        return Rarity::Legendary;
    }
    match entry.hp + entry.attack + entry.defense + entry.speed {
        n if n >= 350 => Rarity::Rare,
        n if n >= 280 => Rarity::Uncommon,
        _ => Rarity::Common,
    }
}

pub(crate) fn card_from_entry(entry: &CatalogEntry, added_at: String) -> Card {
    Card {
        id: 0,
        poke_api_id: entry.id,
        name: entry.name.clone(),
        hp: entry.hp,
        attack: entry.attack,
        defense: entry.defense,
        speed: entry.speed,
        generation: entry.generation,
        image_url: entry.image_url.clone(),
        types: entry.types.clone(),
        rarity: rarity_for(entry),
        is_favorite: false,
        added_at,
    }
}

struct SeedUser {
    username: &'static str,
    password: &'static str,
    admin: bool,
    cards: &'static [i64],
}

const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        username: "ash",
        password: "pikachu",
        admin: true,
        cards: &[25, 4, 1],
    },
    SeedUser {
        username: "misty",
        password: "starmie",
        admin: false,
        cards: &[121, 54],
    },
    SeedUser {
        username: "brock",
        password: "onix",
        admin: false,
        cards: &[95, 74],
    },
];

/// Starting database: the first generation loaded, three collectors, and the
/// dev token bound to the admin (`ash`).
pub(crate) fn seed_db(dataset: &[CatalogEntry], dev_token: &str) -> Db {
    let mut db = Db::default();
    db.loaded = dataset
        .iter()
        .filter(|e| e.generation == 1)
        .map(|e| e.id)
        .collect();

    let created_at = now_ts();
    for seed in SEED_USERS {
        db.next_user_id += 1;
        let id = db.next_user_id;
        db.users.insert(
            id,
            UserRecord {
                id,
                username: seed.username.to_string(),
                email: format!("{}@pokedeck.dev", seed.username),
                password_hash: hash_secret(seed.password),
                admin: seed.admin,
                created_at: created_at.clone(),
            },
        );
        if seed.admin {
            db.tokens.insert(hash_secret(dev_token), id);
        }
        for number in seed.cards {
            if let Some(entry) = dataset.iter().find(|e| e.id == *number) {
                db.insert_card(id, card_from_entry(entry, created_at.clone()));
            }
        }
    }
    db
}
