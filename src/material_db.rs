//! 도파관 내벽 재질별 전기전도율 테이블을 제공한다.
//! 값은 상온 기준 참고값이며 도금/표면 거칠기에 따라 실제 손실은 더 커질 수 있다.

#[derive(Debug)]
pub struct MaterialData {
    pub name: &'static str,
    /// 전기전도율 [S/m]
    pub conductivity_s_per_m: f64,
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

/// 재질명을 대소문자 구분 없이 찾는다. 변형명("Brass (30% Zn)")도 각각 별도 키다.
pub fn find_material(name: &str) -> Option<&'static MaterialData> {
    let name = name.trim();
    MATERIALS.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}

/// 재질 전도율 [S/m]을 반환한다.
pub fn conductivity(name: &str) -> Option<f64> {
    find_material(name).map(|m| m.conductivity_s_per_m)
}

const MATERIALS: &[MaterialData] = &[
    mat("Aluminum", 37.67e6),
    mat("Brass", 15e6),
    mat("Brass (30% Zn)", 16.7e6),
    mat("Brass (5% Zn)", 33.4e6),
    mat("Bronze", 10e6),
    mat("Chromium", 5.56e6),
    mat("Copper", 59.6e6),
    mat("Copper (annealed)", 58e6),
    mat("Gold", 41.1e6),
    mat("Nickel", 11.5e6),
    mat("Silver", 62.9e6),
    mat("Zinc", 17.6e6),
];

const fn mat(name: &'static str, conductivity_s_per_m: f64) -> MaterialData {
    MaterialData {
        name,
        conductivity_s_per_m,
    }
}
