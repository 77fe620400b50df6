//! Static descriptions of every supported endpoint.
//!
//! Each entry is data consumed by [`crate::validate::prepare`]; nothing here
//! performs validation itself.

use crate::date::Granularity::{Day, Second, Year};
use crate::validate::{
    Check, EmptyBody, EndpointSpec, Fallback, Host, Omit, ParamSpec as P, Quota, Route, Rule,
    Shape,
};
use std::ops::Bound::{Excluded, Included, Unbounded};

const DONKI_RANGE: &[P] = &[
    P::query("start_date", "startDate", Shape::Date(Day)),
    P::query("end_date", "endDate", Shape::Date(Day)),
];

const fn donki(name: &'static str, summary: &'static str, path: &'static str) -> EndpointSpec {
    EndpointSpec {
        name,
        summary,
        host: Host::Api,
        path,
        route: Route::Template,
        credential: true,
        params: DONKI_RANGE,
        rules: &[],
        fixed: &[],
        omit: &[],
        empty_body: EmptyBody::EmptyObject,
        quota: Some(Quota::Shared),
        extract: None,
    }
}

const fn ssd(name: &'static str, summary: &'static str, path: &'static str) -> EndpointSpec {
    EndpointSpec {
        name,
        summary,
        host: Host::Ssd,
        path,
        route: Route::Template,
        credential: false,
        params: &[],
        rules: &[],
        fixed: &[],
        omit: &[],
        empty_body: EmptyBody::Reject,
        quota: None,
        extract: None,
    }
}

const fn api(name: &'static str, summary: &'static str, path: &'static str) -> EndpointSpec {
    EndpointSpec {
        name,
        summary,
        host: Host::Api,
        path,
        route: Route::Template,
        credential: true,
        params: &[],
        rules: &[],
        fixed: &[],
        omit: &[],
        empty_body: EmptyBody::Reject,
        quota: Some(Quota::Shared),
        extract: None,
    }
}

const fn images(name: &'static str, summary: &'static str, path: &'static str) -> EndpointSpec {
    EndpointSpec {
        host: Host::Images,
        credential: false,
        quota: None,
        ..api(name, summary, path)
    }
}

const NASA_ID: &[P] = &[P::path("nasa_id", Shape::Str).required()];

pub static APOD: EndpointSpec = EndpointSpec {
    params: &[
        P::query("date", "date", Shape::Date(Day)),
        P::query("hd", "hd", Shape::Bool).default(Fallback::Bool(false)),
    ],
    ..api("apod", "Astronomy Picture of the Day", "/planetary/apod")
};

pub static MARS_WEATHER: EndpointSpec = EndpointSpec {
    fixed: &[("ver", "1.0"), ("feedtype", "json")],
    quota: Some(Quota::MarsWeather),
    ..api("mars_weather", "InSight lander per-sol weather summaries", "/insight_weather/")
};

pub static ASTEROID_FEED: EndpointSpec = EndpointSpec {
    params: &[
        P::query("start_date", "start_date", Shape::Date(Day)).required(),
        P::query("end_date", "end_date", Shape::Date(Day)),
    ],
    ..api("asteroid_feed", "Near-Earth objects by closest-approach date", "/neo/rest/v1/feed")
};

pub static GET_ASTEROIDS: EndpointSpec = EndpointSpec {
    params: &[P::path("asteroid_id", Shape::StrOrNumber)],
    route: Route::OrElse("browse/"),
    ..api("get_asteroids", "Look up one asteroid or browse the dataset", "/neo/rest/v1/neo/")
};

pub static CORONAL_MASS_EJECTION: EndpointSpec = EndpointSpec {
    params: &[
        P::query("start_date", "startDate", Shape::Date(Day)),
        P::query("end_date", "endDate", Shape::Date(Day)),
        P::query("accurate_only", "mostAccurateOnly", Shape::Bool).default(Fallback::Bool(true)),
        P::query("complete_entry", "completeEntryOnly", Shape::Bool).default(Fallback::Bool(true)),
        P::query("speed", "speed", Shape::Number)
            .check(Check::Range(Included(0.0), Unbounded))
            .default(Fallback::Int(0)),
        P::query("half_angle", "halfAngle", Shape::Number)
            .check(Check::Range(Included(0.0), Unbounded))
            .default(Fallback::Int(0)),
        P::query("catalog", "catalog", Shape::Str)
            .check(Check::OneOf(&["ALL", "SWRC_CATALOG", "JANG_ET_AL_CATALOG"]))
            .default(Fallback::Str("ALL")),
        P::query("keyword", "keyword", Shape::Str),
    ],
    ..donki("coronal_mass_ejection", "DONKI coronal mass ejection analyses", "/DONKI/CMEAnalysis")
};

pub static GEOMAGNETIC_STORM: EndpointSpec =
    donki("geomagnetic_storm", "DONKI geomagnetic storms", "/DONKI/GST");

pub static INTERPLANETARY_SHOCK: EndpointSpec = EndpointSpec {
    params: &[
        P::query("start_date", "startDate", Shape::Date(Day)),
        P::query("end_date", "endDate", Shape::Date(Day)),
        P::query("location", "location", Shape::Str)
            .check(Check::OneOf(&["ALL", "Earth", "MESSENGER", "STEREO A", "STEREO B"]))
            .default(Fallback::Str("ALL")),
        P::query("catalog", "catalog", Shape::Str)
            .check(Check::OneOf(&["ALL", "SWRC_CATALOG", "WINSLOW_MESSENGER_ICME_CATALOG"]))
            .default(Fallback::Str("ALL")),
    ],
    ..donki("interplanetary_shock", "DONKI interplanetary shocks", "/DONKI/IPS")
};

pub static SOLAR_FLARE: EndpointSpec = donki("solar_flare", "DONKI solar flares", "/DONKI/FLR");

pub static SOLAR_ENERGETIC_PARTICLE: EndpointSpec = donki(
    "solar_energetic_particle",
    "DONKI solar energetic particle events",
    "/DONKI/SEP",
);

pub static MAGNETOPAUSE_CROSSING: EndpointSpec =
    donki("magnetopause_crossing", "DONKI magnetopause crossings", "/DONKI/MPC");

pub static RADIATION_BELT_ENHANCEMENT: EndpointSpec = donki(
    "radiation_belt_enhancement",
    "DONKI radiation belt enhancements",
    "/DONKI/RBE",
);

pub static HIGH_SPEED_STREAM: EndpointSpec =
    donki("high_speed_stream", "DONKI high speed streams", "/DONKI/HSS");

pub static WSA_ENLIL_SIMULATION: EndpointSpec = donki(
    "wsa_enlil_simulation",
    "DONKI WSA+Enlil solar wind simulations",
    "/DONKI/WSAEnlilSimulations",
);

pub static EPIC: EndpointSpec = EndpointSpec {
    params: &[
        P::path("color", Shape::Str)
            .check(Check::OneOf(&["natural", "enhanced"]))
            .default(Fallback::Str("natural")),
        P::path("date", Shape::Date(Day)),
        P::local("available", Shape::Bool).default(Fallback::Bool(false)),
    ],
    route: Route::Epic,
    empty_body: EmptyBody::EmptyObject,
    ..api("epic", "EPIC full-disc Earth imagery metadata", "/EPIC/api")
};

pub static EARTH_IMAGERY: EndpointSpec = EndpointSpec {
    params: &[
        P::query("lat", "lat", Shape::Number)
            .check(Check::Range(Included(-90.0), Included(90.0)))
            .required(),
        P::query("lon", "lon", Shape::Number)
            .check(Check::Range(Included(-180.0), Included(180.0)))
            .required(),
        P::query("dim", "dim", Shape::Number)
            .check(Check::Range(Excluded(0.0), Unbounded))
            .default(Fallback::Float(0.025)),
        P::query("date", "date", Shape::Date(Day)),
        P::query("cloud_score", "cloud_score", Shape::Bool).default(Fallback::Bool(false)),
    ],
    empty_body: EmptyBody::EmptyObject,
    ..api("earth_imagery", "Landsat imagery for a location", "/planetary/earth/imagery/")
};

pub static EARTH_ASSETS: EndpointSpec = EndpointSpec {
    params: &[
        P::query("lat", "lat", Shape::Number)
            .check(Check::Range(Included(-90.0), Included(90.0)))
            .required(),
        P::query("lon", "lon", Shape::Number)
            .check(Check::Range(Included(-180.0), Included(180.0)))
            .required(),
        P::query("begin_date", "begin_date", Shape::Date(Day)).required(),
        P::query("end_date", "end_date", Shape::Date(Day)),
    ],
    rules: &[Rule::Before {
        start: "begin_date",
        end: "end_date",
        strict: true,
    }],
    ..api("earth_assets", "Landsat acquisition dates for a location", "/planetary/earth/assets")
};

pub static MARS_ROVER: EndpointSpec = EndpointSpec {
    params: &[
        P::path("rover", Shape::Str)
            .check(Check::OneOfCaseless(&["curiosity", "opportunity", "spirit", "perseverance"]))
            .default(Fallback::Str("curiosity")),
        P::query("camera", "camera", Shape::Str)
            .check(Check::OneOf(&[
                "FHAZ", "RHAZ", "MAST", "CHEMCAM", "MAHLI", "MARDI", "NAVCAM", "PANCAM", "MINITES",
                "all",
            ]))
            .default(Fallback::Str("all")),
        P::query("sol", "sol", Shape::Int).check(Check::Range(Included(0.0), Unbounded)),
        P::query("earth_date", "earth_date", Shape::Date(Day)),
        P::query("page", "page", Shape::Int)
            .check(Check::Range(Included(1.0), Unbounded))
            .default(Fallback::Int(1)),
    ],
    rules: &[Rule::Exclusive(&["sol", "earth_date"])],
    omit: &[Omit::IfValue {
        key: "camera",
        value: "all",
    }],
    extract: Some("/photos"),
    ..api(
        "mars_rover",
        "Mars rover photos by sol or Earth date",
        "/mars-photos/api/v1/rovers/{rover}/photos",
    )
};

pub static GENELAB_SEARCH: EndpointSpec = EndpointSpec {
    host: Host::Genelab,
    params: &[
        P::query("term", "term", Shape::Str),
        P::query("database", "type", Shape::Str).default(Fallback::Str("cgene")),
        P::query("page", "from", Shape::Int)
            .check(Check::Range(Included(0.0), Unbounded))
            .default(Fallback::Int(0)),
        P::query("size", "size", Shape::Int)
            .check(Check::Range(Excluded(0.0), Unbounded))
            .default(Fallback::Int(25)),
        P::query("sort", "sort", Shape::Str),
        P::query("order", "order", Shape::Str)
            .check(Check::OneOf(&["desc", "asc"]))
            .default(Fallback::Str("desc"))
            .upper(),
        P::query("ffield", "ffield", Shape::Str),
        P::query("fvalue", "fvalue", Shape::Str),
    ],
    quota: None,
    ..api("genelab_search", "GeneLab omics and assay search", "/genelab/data/search")
};

pub static TECHPORT: EndpointSpec = EndpointSpec {
    params: &[
        P::path("project_id", Shape::StrOrNumber),
        P::query("last_updated", "updatedSince", Shape::Date(Day)),
        P::local("return_format", Shape::Str)
            .check(Check::OneOf(&["json", "xml"]))
            .default(Fallback::Str("json")),
    ],
    route: Route::Techport,
    omit: &[Omit::IfAny {
        keys: &["updatedSince"],
        present: &["project_id"],
    }],
    ..api("techport", "TechPort technology projects", "/techport/api/projects")
};

pub static EXOPLANETS: EndpointSpec = EndpointSpec {
    host: Host::Exoplanet,
    params: &[
        P::query("table", "table", Shape::Str).default(Fallback::Str("exoplanets")),
        P::query("select", "select", Shape::Str),
        P::query("count", "count", Shape::Str),
        P::query("colset", "colset", Shape::Str),
        P::query("where_clause", "where", Shape::Str),
        P::query("order", "order", Shape::Str),
        P::query("ra", "ra", Shape::StrOrNumber),
        P::query("dec", "dec", Shape::StrOrNumber),
        P::query("aliastable", "aliastable", Shape::Str),
        P::query("objname", "objname", Shape::Str),
    ],
    fixed: &[("format", "json")],
    ..ssd(
        "exoplanets",
        "NASA Exoplanet Archive table queries",
        "/cgi-bin/nstedAPI/nph-nstedAPI",
    )
};

pub static TLE: EndpointSpec = EndpointSpec {
    host: Host::Tle,
    params: &[
        P::query("search_satellite", "search", Shape::Str),
        P::path("satellite_number", Shape::Int),
    ],
    rules: &[Rule::Exclusive(&["search_satellite", "satellite_number"])],
    ..ssd("tle", "Two-line element sets for Earth satellites", "/api/tle")
};

pub static MEDIA_SEARCH: EndpointSpec = EndpointSpec {
    params: &[
        P::query("query", "q", Shape::Str),
        P::query("center", "center", Shape::Str),
        P::query("description", "description", Shape::Str),
        P::query("keywords", "keywords", Shape::Str),
        P::query("location", "location", Shape::Str),
        P::query("media_type", "media_type", Shape::Str)
            .check(Check::OneOf(&["image", "audio", "image,audio", "audio,image"])),
        P::query("nasa_id", "nasa_id", Shape::Str),
        P::query("page", "page", Shape::Int)
            .check(Check::Range(Included(1.0), Unbounded))
            .default(Fallback::Int(1)),
        P::query("photographer", "photographer", Shape::Str),
        P::query("secondary_creator", "secondary_creator", Shape::Str),
        P::query("title", "title", Shape::Str),
        P::query("year_start", "year_start", Shape::Date(Year)),
        P::query("year_end", "year_end", Shape::Date(Year)),
    ],
    rules: &[
        Rule::AnyOf(&[
            "query",
            "center",
            "description",
            "keywords",
            "location",
            "media_type",
            "nasa_id",
            "photographer",
            "secondary_creator",
            "title",
            "year_start",
            "year_end",
        ]),
        Rule::Ordered {
            min: "year_start",
            max: "year_end",
        },
    ],
    extract: Some("/collection"),
    ..images("media_search", "NASA Image and Video Library search", "/search")
};

pub static MEDIA_ASSET_MANIFEST: EndpointSpec = EndpointSpec {
    params: NASA_ID,
    extract: Some("/collection/items"),
    ..images("media_asset_manifest", "File manifest for one media asset", "/asset/{nasa_id}")
};

pub static MEDIA_ASSET_METADATA: EndpointSpec = EndpointSpec {
    params: NASA_ID,
    ..images(
        "media_asset_metadata",
        "Metadata document for one media asset",
        "/metadata/{nasa_id}",
    )
};

pub static MEDIA_ASSET_CAPTIONS: EndpointSpec = EndpointSpec {
    params: NASA_ID,
    ..images(
        "media_asset_captions",
        "Captions file for one video asset",
        "/captions/{nasa_id}",
    )
};

pub static CLOSE_APPROACH: EndpointSpec = EndpointSpec {
    params: &[
        P::query("date_min", "date-min", Shape::DateOrNow(Second)).default(Fallback::Now),
        P::query("date_max", "date-max", Shape::DateOrNow(Second)).default(Fallback::Str("+60")),
        P::query("dist_min", "dist-min", Shape::StrOrNumber),
        P::query("dist_max", "dist-max", Shape::StrOrNumber).default(Fallback::Str("0.05")),
        P::query("h_min", "h-min", Shape::Number),
        P::query("h_max", "h-max", Shape::Number),
        P::query("v_inf_min", "v-inf-min", Shape::Number),
        P::query("v_inf_max", "v-inf-max", Shape::Number),
        P::query("v_rel_min", "v-rel-min", Shape::Number),
        P::query("v_rel_max", "v-rel-max", Shape::Number),
        P::query("orbit_class", "class", Shape::Str),
        P::query("pha", "pha", Shape::Bool).default(Fallback::Bool(false)),
        P::query("nea", "nea", Shape::Bool).default(Fallback::Bool(false)),
        P::query("comet", "comet", Shape::Bool).default(Fallback::Bool(false)),
        P::query("nea_comet", "nea-comet", Shape::Bool).default(Fallback::Bool(false)),
        P::query("neo", "neo", Shape::Bool).default(Fallback::Bool(false)),
        P::query("kind", "kind", Shape::Str)
            .check(Check::OneOf(&["a", "an", "au", "c", "cn", "cu", "n", "u"])),
        P::query("spk", "spk", Shape::Int),
        P::query("des", "des", Shape::StrOrNumber),
        P::query("body", "body", Shape::Str).default(Fallback::Str("Earth")),
        P::query("sort", "sort", Shape::Str)
            .check(Check::OneOf(&[
                "date", "dist", "dist-min", "v-inf", "v-rel", "h", "object", "-date", "-dist",
                "-dist-min", "-v-inf", "-v-rel", "-h", "-object",
            ]))
            .default(Fallback::Str("date")),
        P::query("limit", "limit", Shape::Int).check(Check::Range(Excluded(0.0), Unbounded)),
        P::query("fullname", "fullname", Shape::Bool).default(Fallback::Bool(false)),
    ],
    rules: &[
        Rule::Ordered {
            min: "dist_min",
            max: "dist_max",
        },
        Rule::Ordered {
            min: "h_min",
            max: "h_max",
        },
        Rule::Ordered {
            min: "v_inf_min",
            max: "v_inf_max",
        },
        Rule::Ordered {
            min: "v_rel_min",
            max: "v_rel_max",
        },
        Rule::Before {
            start: "date_min",
            end: "date_max",
            strict: false,
        },
        Rule::Exclusive(&["des", "spk"]),
    ],
    ..ssd("close_approach", "Small-body close approaches to planets", "/cad.api")
};

pub static FIREBALLS: EndpointSpec = EndpointSpec {
    params: &[
        P::query("date_min", "date-min", Shape::Date(Day)),
        P::query("date_max", "date-max", Shape::Date(Day)),
        P::query("energy_min", "energy-min", Shape::Number),
        P::query("energy_max", "energy-max", Shape::Number),
        P::query("impact_e_min", "impact-e-min", Shape::Number),
        P::query("impact_e_max", "impact-e-max", Shape::Number),
        P::query("vel_min", "vel-min", Shape::Number),
        P::query("vel_max", "vel-max", Shape::Number),
        P::query("alt_min", "alt-min", Shape::Number),
        P::query("alt_max", "alt-max", Shape::Number),
        P::query("req_loc", "req-loc", Shape::Bool).default(Fallback::Bool(false)),
        P::query("req_alt", "req-alt", Shape::Bool).default(Fallback::Bool(false)),
        P::query("req_vel", "req-vel", Shape::Bool).default(Fallback::Bool(false)),
        P::query("req_vel_comp", "req-vel-comp", Shape::Bool).default(Fallback::Bool(false)),
        P::query("vel_comp", "vel-comp", Shape::Bool).default(Fallback::Bool(false)),
        P::query("sort", "sort", Shape::Str)
            .check(Check::OneOf(&[
                "date", "energy", "impact-e", "vel", "alt", "-date", "-energy", "-impact-e", "-vel",
                "-alt",
            ]))
            .default(Fallback::Str("date")),
        P::query("limit", "limit", Shape::Int).check(Check::Range(Excluded(0.0), Unbounded)),
    ],
    rules: &[
        Rule::Ordered {
            min: "energy_min",
            max: "energy_max",
        },
        Rule::Ordered {
            min: "impact_e_min",
            max: "impact_e_max",
        },
        Rule::Ordered {
            min: "vel_min",
            max: "vel_max",
        },
        Rule::Ordered {
            min: "alt_min",
            max: "alt_max",
        },
        Rule::Before {
            start: "date_min",
            end: "date_max",
            strict: false,
        },
    ],
    ..ssd("fireballs", "Fireball atmospheric impact events", "/fireball.api")
};

pub static MISSION_DESIGN: EndpointSpec = EndpointSpec {
    params: &[
        P::query("des", "des", Shape::StrOrNumber),
        P::query("spk", "spk", Shape::Int),
        P::query("sstr", "sstr", Shape::Str),
        P::query("orbit_class", "class", Shape::Bool).default(Fallback::Bool(false)),
        P::query("mjd0", "mjd0", Shape::Int).check(Check::Range(Included(33282.0), Included(73459.0))),
        P::query("span", "span", Shape::Int).check(Check::Range(Included(10.0), Included(9200.0))),
        P::query("tof_min", "tof-min", Shape::Int)
            .check(Check::Range(Included(10.0), Included(9200.0))),
        P::query("tof_max", "tof-max", Shape::Int)
            .check(Check::Range(Included(10.0), Included(9200.0))),
        P::query("step", "step", Shape::Int).check(Check::OneOfInt(&[1, 2, 5, 10, 15, 20, 30])),
    ],
    rules: &[
        Rule::AnyOf(&["des", "spk", "sstr"]),
        Rule::Exclusive(&["des", "spk", "sstr"]),
        Rule::Ordered {
            min: "tof_min",
            max: "tof_max",
        },
    ],
    ..ssd("mission_design", "Small-body mission design trajectories", "/mdesign.api")
};

pub static NHATS: EndpointSpec = EndpointSpec {
    params: &[
        P::query("spk", "spk", Shape::Int),
        P::query("des", "des", Shape::StrOrNumber),
        P::query("delta_v", "dv", Shape::Int)
            .check(Check::OneOfInt(&[4, 5, 6, 7, 8, 9, 10, 11, 12]))
            .default(Fallback::Int(12)),
        P::query("duration", "dur", Shape::Int)
            .check(Check::OneOfInt(&[
                60, 90, 120, 150, 180, 210, 240, 270, 300, 330, 360, 390, 420, 450,
            ]))
            .default(Fallback::Int(450)),
        P::query("stay", "stay", Shape::Int)
            .check(Check::OneOfInt(&[8, 16, 24, 32]))
            .default(Fallback::Int(8)),
        P::query("launch", "launch", Shape::Str)
            .check(Check::OneOf(&[
                "2020-2025",
                "2025-2030",
                "2030-2035",
                "2035-2040",
                "2040-2045",
                "2020-2045",
            ]))
            .default(Fallback::Str("2020-2045")),
        P::query("magnitude", "h", Shape::Int).check(Check::OneOfInt(&[
            16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30,
        ])),
        P::query("orbit_condition_code", "occ", Shape::Int)
            .check(Check::OneOfInt(&[0, 1, 2, 3, 4, 5, 6, 7, 8])),
        P::query("plot", "plot", Shape::Bool).default(Fallback::Bool(false)),
    ],
    rules: &[Rule::Exclusive(&["spk", "des", "magnitude"])],
    ..ssd("nhats", "Human-accessible near-Earth asteroid targets", "/nhats.api")
};

pub static SCOUT: EndpointSpec = EndpointSpec {
    params: &[
        P::query("tdes", "tdes", Shape::StrOrNumber),
        P::query("plot", "plot", Shape::Bool),
        P::query("data_files", "file", Shape::Str),
        P::query("orbits", "orbits", Shape::Bool),
        P::query("n_orbits", "n-orbits", Shape::Int)
            .check(Check::Range(Included(1.0), Included(1000.0))),
        P::query("eph_start", "eph-start", Shape::DateOrNow(Second)),
        P::query("eph_stop", "eph-stop", Shape::Date(Second)),
        P::query("eph_step", "eph-step", Shape::Str),
        P::query("obs_code", "obs-code", Shape::Str),
        P::query("fov_diam", "fov-diam", Shape::Number)
            .check(Check::Range(Excluded(0.0), Included(1800.0))),
        P::query("fov_ra", "fov-ra", Shape::StrOrNumber),
        P::query("fov_dec", "fov-dec", Shape::StrOrNumber),
        P::query("fov_vmag", "fov-vmag", Shape::Number)
            .check(Check::Range(Included(1.0), Included(40.0))),
    ],
    rules: &[
        Rule::Before {
            start: "eph_start",
            end: "eph_stop",
            strict: true,
        },
        Rule::Requires {
            param: "fov_ra",
            all_of: &["fov_diam", "fov_dec"],
        },
        Rule::Requires {
            param: "fov_dec",
            all_of: &["fov_diam", "fov_ra"],
        },
    ],
    ..ssd("scout", "Scout trajectory analysis of unconfirmed objects", "/scout.api")
};

pub static SENTRY: EndpointSpec = EndpointSpec {
    params: &[
        P::query("spk", "spk", Shape::Int),
        P::query("des", "des", Shape::StrOrNumber),
        P::query("h_max", "h-max", Shape::Number)
            .check(Check::Range(Included(-10.0), Included(100.0))),
        P::query("ps_min", "ps-min", Shape::Number)
            .check(Check::Range(Included(-20.0), Included(20.0))),
        P::query("ip_min", "ip-min", Shape::Number)
            .check(Check::Range(Included(1e-10), Included(1.0))),
        P::query("last_obs_days", "days", Shape::Int).check(Check::AbsAbove(6.0)),
        P::query("complete_data", "all", Shape::Bool).default(Fallback::Bool(false)),
        P::query("removed", "removed", Shape::Bool).default(Fallback::Bool(false)),
    ],
    rules: &[Rule::Exclusive(&["spk", "des"])],
    omit: &[Omit::IfAny {
        keys: &["all", "removed"],
        present: &["spk", "des"],
    }],
    ..ssd("sentry", "Sentry Earth impact monitoring", "/sentry.api")
};

/// Every endpoint, in listing order.
pub static ENDPOINTS: &[&EndpointSpec] = &[
    &APOD,
    &MARS_WEATHER,
    &ASTEROID_FEED,
    &GET_ASTEROIDS,
    &CORONAL_MASS_EJECTION,
    &GEOMAGNETIC_STORM,
    &INTERPLANETARY_SHOCK,
    &SOLAR_FLARE,
    &SOLAR_ENERGETIC_PARTICLE,
    &MAGNETOPAUSE_CROSSING,
    &RADIATION_BELT_ENHANCEMENT,
    &HIGH_SPEED_STREAM,
    &WSA_ENLIL_SIMULATION,
    &EPIC,
    &EARTH_IMAGERY,
    &EARTH_ASSETS,
    &MARS_ROVER,
    &GENELAB_SEARCH,
    &TECHPORT,
    &EXOPLANETS,
    &TLE,
    &MEDIA_SEARCH,
    &MEDIA_ASSET_MANIFEST,
    &MEDIA_ASSET_METADATA,
    &MEDIA_ASSET_CAPTIONS,
    &CLOSE_APPROACH,
    &FIREBALLS,
    &MISSION_DESIGN,
    &NHATS,
    &SCOUT,
    &SENTRY,
];

pub fn lookup(name: &str) -> Option<&'static EndpointSpec> {
    ENDPOINTS.iter().copied().find(|e| e.name == name)
}
