use crate::models::{Candidate, Category};

/// Candidates who withdrew after the cards went to print. Still in the
/// roster so old ledger rows resolve, but never ranked.
pub const WITHDRAWN: &[&str] = &["katrin-wilson"];

pub const ROSTER: &[Candidate] = &[
    Candidate {
        id: "anna-parkes",
        name: "Anna Parkes",
        category: Category::Mayor,
        ward: "Mayor",
        hp: 120,
        image: "/images/anna-parkes.jpg",
        vibe: "Steady hands, open books",
        quote: "Every rate dollar accounted for.",
        totem: "Kererū",
    },
    Candidate {
        id: "duncan-mcrae",
        name: "Duncan McRae",
        category: Category::Mayor,
        ward: "Mayor",
        hp: 95,
        image: "/images/duncan-mcrae.jpg",
        vibe: "Roads first, talk later",
        quote: "Fix the potholes and the rest follows.",
        totem: "Kea",
    },
    Candidate {
        id: "mere-ngatai",
        name: "Mere Ngatai",
        category: Category::Mayor,
        ward: "Mayor",
        hp: 110,
        image: "/images/mere-ngatai.jpg",
        vibe: "The lakefront belongs to everyone",
        quote: "The lake raised us all.",
        totem: "Tuna",
    },
    Candidate {
        id: "gavin-holt",
        name: "Gavin Holt",
        category: Category::Mayor,
        ward: "Mayor",
        hp: 80,
        image: "/images/gavin-holt.jpg",
        vibe: "Small rates, big ideas",
        quote: "",
        totem: "Ruru",
    },
    Candidate {
        id: "hemi-walker",
        name: "Hemi Walker",
        category: Category::Councillor,
        ward: "Māori Ward",
        hp: 105,
        image: "/images/hemi-walker.jpg",
        vibe: "Kaupapa over politics",
        quote: "Decisions made with the awa, not about it.",
        totem: "Kāhu",
    },
    Candidate {
        id: "ripeka-tamati",
        name: "Ripeka Tamati",
        category: Category::Councillor,
        ward: "Māori Ward",
        hp: 98,
        image: "/images/ripeka-tamati.jpg",
        vibe: "Housing before headlines",
        quote: "A warm whare is the first policy.",
        totem: "Pīwakawaka",
    },
    Candidate {
        id: "colin-fraser",
        name: "Colin Fraser",
        category: Category::Councillor,
        ward: "Taupō Ward",
        hp: 88,
        image: "/images/colin-fraser.jpg",
        vibe: "Thirty years behind the counter",
        quote: "Main street pays the bills, remember it.",
        totem: "Pūkeko",
    },
    Candidate {
        id: "june-abbott",
        name: "June Abbott",
        category: Category::Councillor,
        ward: "Taupō Ward",
        hp: 92,
        image: "/images/june-abbott.jpg",
        vibe: "Buses that actually arrive",
        quote: "A town you can cross without a car.",
        totem: "Tūī",
    },
    Candidate {
        id: "katrin-wilson",
        name: "Katrin Wilson",
        category: Category::Councillor,
        ward: "Taupō Ward",
        hp: 90,
        image: "/images/katrin-wilson.jpg",
        vibe: "Withdrawn from the race",
        quote: "",
        totem: "",
    },
    Candidate {
        id: "stu-donnelly",
        name: "Stu Donnelly",
        category: Category::Councillor,
        ward: "Taupō East Rural",
        hp: 85,
        image: "/images/stu-donnelly.jpg",
        vibe: "Gravel roads, fair share",
        quote: "Rural rates deserve rural spending.",
        totem: "Kārearea",
    },
    Candidate {
        id: "petra-kovacs",
        name: "Petra Kovacs",
        category: Category::Councillor,
        ward: "Tūrangi-Tongariro",
        hp: 93,
        image: "/images/petra-kovacs.jpg",
        vibe: "Trout, tracks, and tourists",
        quote: "Look after the river and it looks after us.",
        totem: "Whio",
    },
    Candidate {
        id: "tane-rohe",
        name: "Tane Rohe",
        category: Category::Councillor,
        ward: "Tūrangi-Tongariro",
        hp: 101,
        image: "/images/tane-rohe.jpg",
        vibe: "Mountain weather, mountain patience",
        quote: "",
        totem: "",
    },
    Candidate {
        id: "lorraine-bell",
        name: "Lorraine Bell",
        category: Category::Councillor,
        ward: "Mangakino-Pouakani",
        hp: 87,
        image: "/images/lorraine-bell.jpg",
        vibe: "The forgotten end of the lake",
        quote: "Mangakino is not a line item.",
        totem: "Kōtare",
    },
];

pub fn find(id: &str) -> Option<&'static Candidate> {
    ROSTER.iter().find(|c| c.id == id)
}

pub fn is_withdrawn(id: &str) -> bool {
    WITHDRAWN.contains(&id)
}
