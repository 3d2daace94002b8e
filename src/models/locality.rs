use serde::{Deserialize, Serialize};

/// UF tal como la devuelve el IBGE (`/estados`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "sigla")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Município de una UF (`/estados/{sigla}/municipios`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_ignores_extra_ibge_fields() {
        let json = r#"[
            { "id": 12, "sigla": "AC", "nome": "Acre", "regiao": { "id": 1, "sigla": "N", "nome": "Norte" } },
            { "id": 35, "sigla": "SP", "nome": "São Paulo", "regiao": { "id": 3, "sigla": "SE", "nome": "Sudeste" } }
        ]"#;
        let regions: Vec<Region> = serde_json::from_str(json).unwrap();
        assert_eq!(
            regions,
            vec![
                Region { code: "AC".into(), name: "Acre".into() },
                Region { code: "SP".into(), name: "São Paulo".into() },
            ]
        );
    }

    #[test]
    fn city_reads_ibge_municipio() {
        let json = r#"{ "id": 3509502, "nome": "Campinas", "microrregiao": { "id": 35032 } }"#;
        let city: City = serde_json::from_str(json).unwrap();
        assert_eq!(city, City { id: 3509502, name: "Campinas".into() });
    }
}
