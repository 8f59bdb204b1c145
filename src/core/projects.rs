// Static portfolio catalog shown in the project dialog, keyed by `data-project`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub kicker: &'static str,
    pub title: &'static str,
    pub meta: &'static str,
    pub desc: &'static str,
    pub bullets: &'static [&'static str],
}

pub const PROJECTS: &[(&str, Project)] = &[
    (
        "main-dor",
        Project {
            kicker: "Projet réel",
            title: "La Main d’Or",
            meta: "Beauté — site one-page",
            desc: "Objectif : présenter l’activité clairement et faciliter la prise de contact. Une page structurée, lisible, avec un style premium et des animations légères.",
            bullets: &[
                "Structure one-page (services, tarifs, contact)",
                "Design moderne + micro-interactions",
                "Optimisation responsive + performance",
                "SEO de base (balises, structure, meta)",
            ],
        },
    ),
    (
        "placeholder-1",
        Project {
            kicker: "Placeholder",
            title: "Studio Éclat",
            meta: "Coaching — site one-page",
            desc: "Une landing orientée conversion avec un message clair, une proposition de valeur directe et un CTA très visible.",
            bullets: &[
                "Hero orienté promesse + CTA",
                "Sections preuves / FAQ pour lever les doutes",
                "Formulaire simple et efficace",
            ],
        },
    ),
    (
        "placeholder-2",
        Project {
            kicker: "Placeholder",
            title: "Atelier Nord",
            meta: "Artisan — mini-site 3 pages",
            desc: "Un mini-site propre pour inspirer confiance : présentation, services, contact. Navigation simple, lecture rapide.",
            bullets: &[
                "Architecture 3 pages simple",
                "Design clair + mise en avant des services",
                "Base SEO + performance",
            ],
        },
    ),
];

pub fn find_project(key: &str) -> Option<&'static Project> {
    PROJECTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, project)| project)
}
