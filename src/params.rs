//! Typed parameter structs, one per endpoint family.
//!
//! Every field is optional; unset fields fall back to the endpoint's declared
//! default or are left off the request. Setters consume and return `self`:
//!
//! ```
//! use nasa_api::params::CloseApproachParams;
//! let p = CloseApproachParams::default().des("433").date_max("2100-01-01");
//! assert_eq!(p.des, Some("433".into()));
//! ```

use crate::args::{Arg, Args, ToArgs};
use crate::date::DateLike;

macro_rules! params {
    ($(#[$meta:meta])* $name:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $field: Option<$ty>,)*
        }

        impl $name {
            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl ToArgs for $name {
            fn to_args(&self) -> Args {
                let mut args = Args::new();
                $(args.set_opt(stringify!($field), self.$field.clone());)*
                args
            }
        }
    };
}

params!(
    /// Astronomy Picture of the Day.
    ApodParams {
        date: DateLike,
        hd: bool,
    }
);

params!(
    AsteroidFeedParams {
        start_date: DateLike,
        end_date: DateLike,
    }
);

impl AsteroidFeedParams {
    pub fn starting(start_date: impl Into<DateLike>) -> Self {
        Self::default().start_date(start_date)
    }
}

params!(
    /// Date window shared by the DONKI event feeds.
    DonkiRange {
        start_date: DateLike,
        end_date: DateLike,
    }
);

params!(
    CoronalMassEjectionParams {
        start_date: DateLike,
        end_date: DateLike,
        accurate_only: bool,
        complete_entry: bool,
        speed: f64,
        half_angle: f64,
        catalog: String,
        keyword: String,
    }
);

params!(
    InterplanetaryShockParams {
        start_date: DateLike,
        end_date: DateLike,
        location: String,
        catalog: String,
    }
);

params!(
    EpicParams {
        color: String,
        date: DateLike,
        available: bool,
    }
);

params!(
    EarthImageryParams {
        lat: f64,
        lon: f64,
        dim: f64,
        date: DateLike,
        cloud_score: bool,
    }
);

impl EarthImageryParams {
    pub fn at(lat: f64, lon: f64) -> Self {
        Self::default().lat(lat).lon(lon)
    }
}

params!(
    EarthAssetsParams {
        lat: f64,
        lon: f64,
        begin_date: DateLike,
        end_date: DateLike,
    }
);

impl EarthAssetsParams {
    pub fn new(lat: f64, lon: f64, begin_date: impl Into<DateLike>) -> Self {
        Self::default().lat(lat).lon(lon).begin_date(begin_date)
    }
}

params!(
    MarsRoverParams {
        rover: String,
        camera: String,
        sol: i64,
        earth_date: DateLike,
        page: i64,
    }
);

params!(
    GenelabSearchParams {
        term: String,
        database: String,
        page: i64,
        size: i64,
        sort: String,
        order: String,
        ffield: String,
        fvalue: String,
    }
);

params!(
    TechportParams {
        project_id: Arg,
        last_updated: DateLike,
        return_format: String,
    }
);

params!(
    ExoplanetParams {
        table: String,
        select: String,
        count: String,
        colset: String,
        where_clause: String,
        order: String,
        ra: Arg,
        dec: Arg,
        aliastable: String,
        objname: String,
    }
);

params!(
    TleParams {
        search_satellite: String,
        satellite_number: i64,
    }
);

params!(
    /// NASA Image and Video Library search. At least one field besides `page`
    /// must be set.
    MediaSearchParams {
        query: String,
        center: String,
        description: String,
        keywords: String,
        location: String,
        media_type: String,
        nasa_id: String,
        page: i64,
        photographer: String,
        secondary_creator: String,
        title: String,
        year_start: DateLike,
        year_end: DateLike,
    }
);

params!(
    /// Small-body close approaches. `date_min` defaults to `now`, `date_max`
    /// to `+60` days, `dist_max` to `0.05` au.
    CloseApproachParams {
        date_min: DateLike,
        date_max: DateLike,
        dist_min: Arg,
        dist_max: Arg,
        h_min: f64,
        h_max: f64,
        v_inf_min: f64,
        v_inf_max: f64,
        v_rel_min: f64,
        v_rel_max: f64,
        orbit_class: String,
        pha: bool,
        nea: bool,
        comet: bool,
        nea_comet: bool,
        neo: bool,
        kind: String,
        spk: i64,
        des: Arg,
        body: String,
        sort: String,
        limit: i64,
        fullname: bool,
    }
);

params!(
    FireballParams {
        date_min: DateLike,
        date_max: DateLike,
        energy_min: f64,
        energy_max: f64,
        impact_e_min: f64,
        impact_e_max: f64,
        vel_min: f64,
        vel_max: f64,
        alt_min: f64,
        alt_max: f64,
        req_loc: bool,
        req_alt: bool,
        req_vel: bool,
        req_vel_comp: bool,
        vel_comp: bool,
        sort: String,
        limit: i64,
    }
);

params!(
    /// Exactly one of `des`, `spk` or `sstr` identifies the object.
    MissionDesignParams {
        des: Arg,
        spk: i64,
        sstr: String,
        orbit_class: bool,
        mjd0: i64,
        span: i64,
        tof_min: i64,
        tof_max: i64,
        step: i64,
    }
);

params!(
    NhatsParams {
        spk: i64,
        des: Arg,
        delta_v: i64,
        duration: i64,
        stay: i64,
        launch: String,
        magnitude: i64,
        orbit_condition_code: i64,
        plot: bool,
    }
);

params!(
    ScoutParams {
        tdes: Arg,
        plot: bool,
        data_files: String,
        orbits: bool,
        n_orbits: i64,
        eph_start: DateLike,
        eph_stop: DateLike,
        eph_step: String,
        obs_code: String,
        fov_diam: f64,
        fov_ra: Arg,
        fov_dec: Arg,
        fov_vmag: f64,
    }
);

params!(
    SentryParams {
        spk: i64,
        des: Arg,
        h_max: f64,
        ps_min: f64,
        ip_min: f64,
        last_obs_days: i64,
        complete_data: bool,
        removed: bool,
    }
);
