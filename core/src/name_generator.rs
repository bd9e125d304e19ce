//! Deterministic member and client naming for synthetic rosters.
//!
//! Same RNG seed = same names.

use crate::rng::RosterRng;

pub struct NameGenerator;

impl NameGenerator {
    /// "First Last"
    pub fn generate_full_name(rng: &mut RosterRng) -> String {
        let first = rng.pick(Self::first_names());
        let last = rng.pick(Self::last_names());
        format!("{first} {last}")
    }

    /// "Prefix Sector Suffix", e.g. "Northwind Logistics Group".
    pub fn generate_client_name(rng: &mut RosterRng) -> String {
        let prefix = rng.pick(Self::client_prefixes());
        let sector = rng.pick(Self::client_sectors());
        let suffix = rng.pick(Self::client_suffixes());
        format!("{prefix} {sector} {suffix}")
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Ana", "Bruno", "Camila", "Diego", "Elena", "Felipe", "Gabriela", "Hugo",
            "Isabela", "João", "Karina", "Lucas", "Mariana", "Nicolás", "Olivia", "Pedro",
            "Quentin", "Rafaela", "Samuel", "Tatiana", "Ulises", "Valentina", "William",
            "Ximena", "Yusuf", "Zoe", "Aiko", "Bilal", "Chiara", "Dmitri", "Esther",
            "Farah", "Gustavo", "Hana", "Ivan", "Julia", "Kenji", "Leila", "Mateo",
            "Noor", "Oscar", "Priya", "Rohan", "Sofia", "Thiago", "Uma", "Victor", "Wen",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Almeida", "Barros", "Castillo", "Duarte", "Espinoza", "Ferreira", "Gomes",
            "Herrera", "Ibarra", "Jiménez", "Kowalski", "Lopes", "Moreira", "Nakamura",
            "Ortega", "Pereira", "Quiroga", "Ribeiro", "Santos", "Teixeira", "Uchida",
            "Vargas", "Weber", "Xavier", "Yamada", "Zanetti", "Andrade", "Bianchi",
            "Cardoso", "Dias", "Estrada", "Fonseca", "Guerra", "Haddad", "Iglesias",
            "Jensen", "Khan", "Lindqvist", "Mendes", "Novak", "Okafor", "Petrov",
        ]
    }

    fn client_prefixes() -> &'static [&'static str] {
        &[
            "Northwind", "Bluepeak", "Redwood", "Silverline", "Harbor", "Summit",
            "Ironbridge", "Clearwater", "Brightfield", "Stonegate", "Evergreen", "Solstice",
        ]
    }

    fn client_sectors() -> &'static [&'static str] {
        &[
            "Logistics", "Health", "Retail", "Energy", "Media", "Banking", "Insurance",
            "Telecom", "Mobility", "Foods", "Analytics", "Education",
        ]
    }

    fn client_suffixes() -> &'static [&'static str] {
        &["Group", "Labs", "Partners", "Holdings", "Co.", "Systems", "Digital"]
    }
}
