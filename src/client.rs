use crate::args::{Args, ToArgs};
use crate::catalog;
use crate::config::Config;
use crate::error::{NasaError, Result, TransportError};
use crate::http::{extract_rate, redact_url, HttpTransport, Transport};
use crate::params::*;
use crate::response::{asset_location, normalize};
use crate::types::{Captions, Meta, Payload, Response};
use crate::validate::{prepare, EndpointSpec, Quota};
use log::debug;
use serde_json::Value;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default, Clone, Copy)]
struct Counters {
    shared: Option<i64>,
    mars_weather: Option<i64>,
}

/// Client for every endpoint in [`catalog::ENDPOINTS`].
///
/// Calls are blocking. A rejected argument never reaches the transport.
pub struct Nasa {
    config: Config,
    transport: Box<dyn Transport>,
    counters: Mutex<Counters>,
}

impl std::fmt::Debug for Nasa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nasa")
            .field("api_url", &self.config.api_url)
            .field("counters", &self.counters())
            .finish_non_exhaustive()
    }
}

/// A media asset's pointer to the document that describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocator {
    pub nasa_id: String,
    pub location: String,
}

impl Nasa {
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(&config).map_err(|e| {
            NasaError::from(TransportError::network(None, format!("client setup failed: {e}")))
        })?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Configuration from `NASA_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn with_transport(config: Config, transport: Box<dyn Transport>) -> Self {
        Nasa {
            config,
            transport,
            counters: Mutex::new(Counters::default()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// Last `X-RateLimit-Remaining` reported by an api.nasa.gov endpoint.
    pub fn limit_remaining(&self) -> Option<i64> {
        self.counters().shared
    }

    /// Same, for the Mars weather service, which is metered separately.
    pub fn mars_weather_limit_remaining(&self) -> Option<i64> {
        self.counters().mars_weather
    }

    fn counters(&self) -> Counters {
        *self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate, send, and normalize one request.
    pub fn fetch(&self, spec: &EndpointSpec, args: &Args) -> Result<Response<Payload>> {
        let prepared = prepare(spec, args, Some(&self.config.api_key))?;
        let url = format!(
            "{}{}",
            self.config.base_url(spec.host),
            prepared.resolve_path(spec)
        );
        debug!("{} -> {}", spec.name, url);
        let raw = self.transport.get(&url, &prepared.query)?;
        let payload = normalize(spec, &prepared, &raw)?;

        let rate = extract_rate(&raw.headers);
        if let (Some(quota), Some(remaining)) = (spec.quota, rate.and_then(|r| r.remaining)) {
            let mut c = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
            match quota {
                Quota::Shared => c.shared = Some(remaining),
                Quota::MarsWeather => c.mars_weather = Some(remaining),
            }
        }

        Ok(Response {
            value: payload,
            meta: Meta {
                url: redact_url(&raw.url),
                rate,
            },
        })
    }

    fn json(&self, spec: &EndpointSpec, params: &impl ToArgs) -> Result<Response<Value>> {
        Ok(self.fetch(spec, &params.to_args())?.map(Payload::into_json))
    }

    /// Dynamic entry point: any catalog endpoint by name, JSON-shaped result.
    pub fn call(&self, endpoint: &str, args: &Args) -> Result<Response<Value>> {
        let spec = catalog::lookup(endpoint).ok_or_else(|| {
            NasaError::from(crate::error::ValueError::NotInSet {
                param: "endpoint".into(),
                value: endpoint.into(),
                allowed: catalog::ENDPOINTS.iter().map(|e| e.name.to_string()).collect(),
            })
        })?;
        match spec.name {
            "media_asset_metadata" => self.asset_metadata_with(args),
            "media_asset_captions" => {
                let res = self.asset_captions_with(args)?;
                Ok(res.map(|c| serde_json::json!({"location": c.location, "captions": c.captions})))
            }
            _ => self.json(spec, args),
        }
    }

    pub fn picture_of_the_day(&self, p: &ApodParams) -> Result<Response<Value>> {
        self.json(&catalog::APOD, p)
    }

    pub fn mars_weather(&self) -> Result<Response<Value>> {
        self.json(&catalog::MARS_WEATHER, &Args::new())
    }

    pub fn asteroid_feed(&self, p: &AsteroidFeedParams) -> Result<Response<Value>> {
        self.json(&catalog::ASTEROID_FEED, p)
    }

    /// One asteroid by SPK-ID, or the browse listing when `id` is `None`.
    pub fn get_asteroids(&self, id: Option<&str>) -> Result<Response<Value>> {
        let mut args = Args::new();
        args.set_opt("asteroid_id", id);
        self.json(&catalog::GET_ASTEROIDS, &args)
    }

    pub fn coronal_mass_ejection(&self, p: &CoronalMassEjectionParams) -> Result<Response<Value>> {
        self.json(&catalog::CORONAL_MASS_EJECTION, p)
    }

    pub fn geomagnetic_storm(&self, p: &DonkiRange) -> Result<Response<Value>> {
        self.json(&catalog::GEOMAGNETIC_STORM, p)
    }

    pub fn interplanetary_shock(&self, p: &InterplanetaryShockParams) -> Result<Response<Value>> {
        self.json(&catalog::INTERPLANETARY_SHOCK, p)
    }

    pub fn solar_flare(&self, p: &DonkiRange) -> Result<Response<Value>> {
        self.json(&catalog::SOLAR_FLARE, p)
    }

    pub fn solar_energetic_particle(&self, p: &DonkiRange) -> Result<Response<Value>> {
        self.json(&catalog::SOLAR_ENERGETIC_PARTICLE, p)
    }

    pub fn magnetopause_crossing(&self, p: &DonkiRange) -> Result<Response<Value>> {
        self.json(&catalog::MAGNETOPAUSE_CROSSING, p)
    }

    pub fn radiation_belt_enhancement(&self, p: &DonkiRange) -> Result<Response<Value>> {
        self.json(&catalog::RADIATION_BELT_ENHANCEMENT, p)
    }

    pub fn high_speed_stream(&self, p: &DonkiRange) -> Result<Response<Value>> {
        self.json(&catalog::HIGH_SPEED_STREAM, p)
    }

    pub fn wsa_enlil_simulation(&self, p: &DonkiRange) -> Result<Response<Value>> {
        self.json(&catalog::WSA_ENLIL_SIMULATION, p)
    }

    pub fn epic(&self, p: &EpicParams) -> Result<Response<Value>> {
        self.json(&catalog::EPIC, p)
    }

    pub fn earth_imagery(&self, p: &EarthImageryParams) -> Result<Response<Value>> {
        self.json(&catalog::EARTH_IMAGERY, p)
    }

    pub fn earth_assets(&self, p: &EarthAssetsParams) -> Result<Response<Value>> {
        self.json(&catalog::EARTH_ASSETS, p)
    }

    /// Photo records (the `photos` array of the reply).
    pub fn mars_rover(&self, p: &MarsRoverParams) -> Result<Response<Value>> {
        self.json(&catalog::MARS_ROVER, p)
    }

    pub fn genelab_search(&self, p: &GenelabSearchParams) -> Result<Response<Value>> {
        self.json(&catalog::GENELAB_SEARCH, p)
    }

    /// JSON by default; `return_format("xml")` with a project id yields text.
    pub fn techport(&self, p: &TechportParams) -> Result<Response<Payload>> {
        self.fetch(&catalog::TECHPORT, &p.to_args())
    }

    pub fn exoplanets(&self, p: &ExoplanetParams) -> Result<Response<Value>> {
        self.json(&catalog::EXOPLANETS, p)
    }

    pub fn tle(&self, p: &TleParams) -> Result<Response<Value>> {
        self.json(&catalog::TLE, p)
    }

    pub fn media_search(&self, p: &MediaSearchParams) -> Result<Response<Value>> {
        self.json(&catalog::MEDIA_SEARCH, p)
    }

    pub fn media_asset_manifest(&self, nasa_id: &str) -> Result<Response<Value>> {
        self.json(&catalog::MEDIA_ASSET_MANIFEST, &Args::new().with("nasa_id", nasa_id))
    }

    /// First step of the asset pipeline: where the metadata document lives.
    pub fn media_asset_metadata_location(&self, nasa_id: &str) -> Result<AssetLocator> {
        self.locate(&catalog::MEDIA_ASSET_METADATA, &Args::new().with("nasa_id", nasa_id))
    }

    /// The metadata document, with the `location` it was fetched from added.
    pub fn media_asset_metadata(&self, nasa_id: &str) -> Result<Response<Value>> {
        self.asset_metadata_with(&Args::new().with("nasa_id", nasa_id))
    }

    pub fn media_asset_captions_location(&self, nasa_id: &str) -> Result<AssetLocator> {
        self.locate(&catalog::MEDIA_ASSET_CAPTIONS, &Args::new().with("nasa_id", nasa_id))
    }

    pub fn media_asset_captions(&self, nasa_id: &str) -> Result<Response<Captions>> {
        self.asset_captions_with(&Args::new().with("nasa_id", nasa_id))
    }

    pub fn close_approach(&self, p: &CloseApproachParams) -> Result<Response<Value>> {
        self.json(&catalog::CLOSE_APPROACH, p)
    }

    pub fn fireballs(&self, p: &FireballParams) -> Result<Response<Value>> {
        self.json(&catalog::FIREBALLS, p)
    }

    pub fn mission_design(&self, p: &MissionDesignParams) -> Result<Response<Value>> {
        self.json(&catalog::MISSION_DESIGN, p)
    }

    pub fn nhats(&self, p: &NhatsParams) -> Result<Response<Value>> {
        self.json(&catalog::NHATS, p)
    }

    pub fn scout(&self, p: &ScoutParams) -> Result<Response<Value>> {
        self.json(&catalog::SCOUT, p)
    }

    pub fn sentry(&self, p: &SentryParams) -> Result<Response<Value>> {
        self.json(&catalog::SENTRY, p)
    }

    fn locate(&self, spec: &EndpointSpec, args: &Args) -> Result<AssetLocator> {
        let res = self.fetch(spec, args)?;
        let value = res.value.into_json();
        let location = asset_location(&value, &res.meta.url)?;
        let nasa_id = args
            .get("nasa_id")
            .map(ToString::to_string)
            .unwrap_or_default();
        Ok(AssetLocator { nasa_id, location })
    }

    /// Second step: GET the located document. Same transport, no credential.
    fn follow(&self, location: &str) -> Result<crate::http::RawResponse> {
        debug!("following asset location {}", location);
        let raw = self.transport.get(location, &[])?;
        if !raw.status.is_success() {
            return Err(crate::http::map_status_to_error(raw.status, &raw.url, &raw.body).into());
        }
        Ok(raw)
    }

    fn asset_metadata_with(&self, args: &Args) -> Result<Response<Value>> {
        let loc = self.locate(&catalog::MEDIA_ASSET_METADATA, args)?;
        let raw = self.follow(&loc.location)?;
        let mut value: Value = serde_json::from_str(&raw.body).map_err(|e| {
            TransportError::malformed(Some(redact_url(&raw.url)), e.to_string())
        })?;
        match value.as_object_mut() {
            Some(map) => {
                map.insert("location".into(), Value::String(loc.location.clone()));
            }
            None => {
                return Err(TransportError::unexpected(
                    Some(redact_url(&raw.url)),
                    "metadata document is not an object",
                )
                .into())
            }
        }
        Ok(Response {
            value,
            meta: Meta {
                url: redact_url(&raw.url),
                rate: extract_rate(&raw.headers),
            },
        })
    }

    fn asset_captions_with(&self, args: &Args) -> Result<Response<Captions>> {
        let loc = self.locate(&catalog::MEDIA_ASSET_CAPTIONS, args)?;
        let raw = self.follow(&loc.location)?;
        Ok(Response {
            value: Captions {
                location: loc.location,
                captions: raw.body,
            },
            meta: Meta {
                url: redact_url(&raw.url),
                rate: extract_rate(&raw.headers),
            },
        })
    }
}
