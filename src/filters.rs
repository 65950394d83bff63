//! Filter enums and their wire tables.
//!
//! One enum per filterable API parameter. The wire string of each member is the
//! exact token the API accepts; genre members use their MyAnimeList genre ID both
//! as declared integer and as token.
//!
//! The MyAnimeList genre catalogue historically listed two names under ID `32`.
//! Genre enums here can only declare an ID once, so `32` is `Vampire` in both
//! catalogues.

use crate::wire::wire_enum;

wire_enum! {
    /// Direction of a sorted listing.
    #[derive(Default)]
    pub enum SortDirection {
        #[default]
        Ascending = 0 => "asc",
        Descending = 1 => "desc",
    }
}

// Anime

wire_enum! {
    /// Anime media type.
    pub enum AnimeType {
        Tv = 0 => "tv",
        Movie = 1 => "movie",
        Ova = 2 => "ova",
        Special = 3 => "special",
        Ona = 4 => "ona",
        Music = 5 => "music",
        Cm = 6 => "cm",
        Pv = 7 => "pv",
        TvSpecial = 8 => "tv_special",
    }
}

wire_enum! {
    /// Airing status of an anime.
    pub enum AnimeStatus {
        Airing = 0 => "airing",
        Complete = 1 => "complete",
        Upcoming = 2 => "upcoming",
    }
}

wire_enum! {
    /// Audience age rating.
    pub enum AgeRating {
        /// All ages
        G = 0 => "g",
        /// Children
        Pg = 1 => "pg",
        /// Teens 13 or older
        Pg13 = 2 => "pg13",
        /// 17+ (violence & profanity)
        R17 = 3 => "r17",
        /// Mild nudity
        R = 4 => "r",
        /// Hentai
        Rx = 5 => "rx",
    }
}

wire_enum! {
    /// Sort key for anime searches.
    pub enum AnimeOrderBy {
        MalId = 0 => "mal_id",
        Title = 1 => "title",
        StartDate = 2 => "start_date",
        EndDate = 3 => "end_date",
        Episodes = 4 => "episodes",
        Score = 5 => "score",
        ScoredBy = 6 => "scored_by",
        Rank = 7 => "rank",
        Popularity = 8 => "popularity",
        Members = 9 => "members",
        Favorites = 10 => "favorites",
    }
}

wire_enum! {
    /// Anime genres, themes and demographics by MyAnimeList ID.
    pub enum AnimeGenre {
        Action = 1 => "1",
        Adventure = 2 => "2",
        Racing = 3 => "3",
        Comedy = 4 => "4",
        AvantGarde = 5 => "5",
        Mythology = 6 => "6",
        Mystery = 7 => "7",
        Drama = 8 => "8",
        Ecchi = 9 => "9",
        Fantasy = 10 => "10",
        StrategyGame = 11 => "11",
        Hentai = 12 => "12",
        Historical = 13 => "13",
        Horror = 14 => "14",
        Kids = 15 => "15",
        MartialArts = 17 => "17",
        Mecha = 18 => "18",
        Music = 19 => "19",
        Parody = 20 => "20",
        Samurai = 21 => "21",
        Romance = 22 => "22",
        School = 23 => "23",
        SciFi = 24 => "24",
        Shoujo = 25 => "25",
        GirlsLove = 26 => "26",
        Shounen = 27 => "27",
        BoysLove = 28 => "28",
        Space = 29 => "29",
        Sports = 30 => "30",
        SuperPower = 31 => "31",
        Vampire = 32 => "32",
        Harem = 35 => "35",
        SliceOfLife = 36 => "36",
        Supernatural = 37 => "37",
        Military = 38 => "38",
        Detective = 39 => "39",
        Psychological = 40 => "40",
        Suspense = 41 => "41",
        Seinen = 42 => "42",
        Josei = 43 => "43",
        AwardWinning = 46 => "46",
        Gourmet = 47 => "47",
        Workplace = 48 => "48",
        Erotica = 49 => "49",
        AdultCast = 50 => "50",
        Anthropomorphic = 51 => "51",
        Cgdct = 52 => "52",
        Childcare = 53 => "53",
        CombatSports = 54 => "54",
        Delinquents = 55 => "55",
        Educational = 56 => "56",
        GagHumor = 57 => "57",
        Gore = 58 => "58",
        HighStakesGame = 59 => "59",
        IdolsFemale = 60 => "60",
        IdolsMale = 61 => "61",
        Isekai = 62 => "62",
        Iyashikei = 63 => "63",
        LovePolygon = 64 => "64",
        MagicalSexShift = 65 => "65",
        MahouShoujo = 66 => "66",
        Medical = 67 => "67",
        OrganizedCrime = 68 => "68",
        OtakuCulture = 69 => "69",
        PerformingArts = 70 => "70",
        Pets = 71 => "71",
        Reincarnation = 72 => "72",
        ReverseHarem = 73 => "73",
        RomanticSubtext = 74 => "74",
        Showbiz = 75 => "75",
        Survival = 76 => "76",
        TeamSports = 77 => "77",
        TimeTravel = 78 => "78",
        VideoGame = 79 => "79",
        VisualArts = 80 => "80",
        Crossdressing = 81 => "81",
    }
}

wire_enum! {
    /// Ranking filter for the top anime list.
    pub enum TopAnimeFilter {
        Airing = 0 => "airing",
        Upcoming = 1 => "upcoming",
        ByPopularity = 2 => "bypopularity",
        Favorites = 3 => "favorite",
    }
}

// Manga

wire_enum! {
    /// Manga media type.
    pub enum MangaType {
        Manga = 0 => "manga",
        Novel = 1 => "novel",
        LightNovel = 2 => "lightnovel",
        OneShot = 3 => "oneshot",
        Doujin = 4 => "doujin",
        Manhwa = 5 => "manhwa",
        Manhua = 6 => "manhua",
    }
}

wire_enum! {
    /// Publishing status of a manga.
    pub enum MangaStatus {
        Publishing = 0 => "publishing",
        Complete = 1 => "complete",
        Hiatus = 2 => "hiatus",
        Discontinued = 3 => "discontinued",
        Upcoming = 4 => "upcoming",
    }
}

wire_enum! {
    /// Sort key for manga searches.
    pub enum MangaOrderBy {
        MalId = 0 => "mal_id",
        Title = 1 => "title",
        StartDate = 2 => "start_date",
        EndDate = 3 => "end_date",
        Chapters = 4 => "chapters",
        Volumes = 5 => "volumes",
        Score = 6 => "score",
        ScoredBy = 7 => "scored_by",
        Rank = 8 => "rank",
        Popularity = 9 => "popularity",
        Members = 10 => "members",
        Favorites = 11 => "favorites",
    }
}

wire_enum! {
    /// Manga genres, themes and demographics by MyAnimeList ID.
    pub enum MangaGenre {
        Action = 1 => "1",
        Adventure = 2 => "2",
        Racing = 3 => "3",
        Comedy = 4 => "4",
        AvantGarde = 5 => "5",
        Mythology = 6 => "6",
        Mystery = 7 => "7",
        Drama = 8 => "8",
        Ecchi = 9 => "9",
        Fantasy = 10 => "10",
        StrategyGame = 11 => "11",
        Hentai = 12 => "12",
        Historical = 13 => "13",
        Horror = 14 => "14",
        Kids = 15 => "15",
        MartialArts = 17 => "17",
        Mecha = 18 => "18",
        Music = 19 => "19",
        Parody = 20 => "20",
        Samurai = 21 => "21",
        Romance = 22 => "22",
        School = 23 => "23",
        SciFi = 24 => "24",
        Shoujo = 25 => "25",
        GirlsLove = 26 => "26",
        Shounen = 27 => "27",
        BoysLove = 28 => "28",
        Space = 29 => "29",
        Sports = 30 => "30",
        SuperPower = 31 => "31",
        Vampire = 32 => "32",
        Harem = 35 => "35",
        SliceOfLife = 36 => "36",
        Supernatural = 37 => "37",
        Military = 38 => "38",
        Detective = 39 => "39",
        Psychological = 40 => "40",
        Seinen = 41 => "41",
        Josei = 42 => "42",
        Crossdressing = 44 => "44",
        Suspense = 45 => "45",
        AwardWinning = 46 => "46",
        Gourmet = 47 => "47",
        Workplace = 48 => "48",
        Erotica = 49 => "49",
        AdultCast = 50 => "50",
        Anthropomorphic = 51 => "51",
        Cgdct = 52 => "52",
        Childcare = 53 => "53",
        CombatSports = 54 => "54",
        Delinquents = 55 => "55",
        Educational = 56 => "56",
        GagHumor = 57 => "57",
        Gore = 58 => "58",
        HighStakesGame = 59 => "59",
        IdolsFemale = 60 => "60",
        IdolsMale = 61 => "61",
        Isekai = 62 => "62",
        Iyashikei = 63 => "63",
        LovePolygon = 64 => "64",
        MagicalSexShift = 65 => "65",
        MahouShoujo = 66 => "66",
        Medical = 67 => "67",
        Memoir = 68 => "68",
        OrganizedCrime = 69 => "69",
        OtakuCulture = 70 => "70",
        PerformingArts = 71 => "71",
        Pets = 72 => "72",
        Reincarnation = 73 => "73",
        ReverseHarem = 74 => "74",
        RomanticSubtext = 75 => "75",
        Showbiz = 76 => "76",
        Survival = 77 => "77",
        TeamSports = 78 => "78",
        TimeTravel = 79 => "79",
        VideoGame = 80 => "80",
        Villainess = 81 => "81",
        VisualArts = 82 => "82",
    }
}

wire_enum! {
    /// Ranking filter for the top manga list.
    pub enum TopMangaFilter {
        Publishing = 0 => "publishing",
        Upcoming = 1 => "upcoming",
        ByPopularity = 2 => "bypopularity",
        Favorites = 3 => "favorite",
    }
}

// People and characters

wire_enum! {
    /// Sort key for character searches.
    pub enum CharacterOrderBy {
        MalId = 0 => "mal_id",
        Name = 1 => "name",
        Favorites = 2 => "favorites",
    }
}

wire_enum! {
    /// Sort key for people searches.
    pub enum PersonOrderBy {
        MalId = 0 => "mal_id",
        Name = 1 => "name",
        Birthday = 2 => "birthday",
        Favorites = 3 => "favorites",
    }
}

// Community

wire_enum! {
    /// Gender filter for user searches.
    pub enum UserGender {
        Male = 0 => "male",
        Female = 1 => "female",
        NonBinary = 2 => "nonbinary",
    }
}

wire_enum! {
    /// Club visibility.
    pub enum ClubType {
        Public = 0 => "public",
        Private = 1 => "private",
        Secret = 2 => "secret",
    }
}

wire_enum! {
    /// Club category.
    pub enum ClubCategory {
        Anime = 0 => "anime",
        Manga = 1 => "manga",
        ActorsAndArtists = 2 => "actors_and_artists",
        Characters = 3 => "characters",
        CitiesAndNeighborhoods = 4 => "cities_and_neighborhoods",
        Companies = 5 => "companies",
        Conventions = 6 => "conventions",
        Games = 7 => "games",
        Japan = 8 => "japan",
        Music = 9 => "music",
        Other = 10 => "other",
        Schools = 11 => "schools",
    }
}

wire_enum! {
    /// Sort key for club searches.
    pub enum ClubOrderBy {
        MalId = 0 => "mal_id",
        Name = 1 => "name",
        MembersCount = 2 => "members_count",
        Created = 3 => "created",
    }
}

// Catalogue

wire_enum! {
    /// Sort key for producer searches.
    pub enum ProducerOrderBy {
        MalId = 0 => "mal_id",
        Count = 1 => "count",
        Favorites = 2 => "favorites",
        Established = 3 => "established",
    }
}

wire_enum! {
    /// Sort key for magazine searches.
    pub enum MagazineOrderBy {
        MalId = 0 => "mal_id",
        Name = 1 => "name",
        Count = 2 => "count",
    }
}

wire_enum! {
    /// Genre category filter for the genre listings.
    pub enum GenreFilter {
        Genres = 0 => "genres",
        ExplicitGenres = 1 => "explicit_genres",
        Themes = 2 => "themes",
        Demographics = 3 => "demographics",
    }
}

wire_enum! {
    /// Which of the two catalogues a listing is drawn from.
    #[derive(Default)]
    pub enum MediaKind {
        #[default]
        Anime = 0 => "anime",
        Manga = 1 => "manga",
    }
}

wire_enum! {
    /// Ranked lists that only take pagination.
    #[derive(Default)]
    pub enum TopList {
        #[default]
        Characters = 0 => "characters",
        People = 1 => "people",
    }
}

// Seasons and schedules

wire_enum! {
    /// Broadcast season.
    pub enum Season {
        Winter = 0 => "winter",
        Spring = 1 => "spring",
        Summer = 2 => "summer",
        Fall = 3 => "fall",
    }
}

wire_enum! {
    /// Broadcast weekday for schedules.
    pub enum ScheduleDay {
        Monday = 0 => "monday",
        Tuesday = 1 => "tuesday",
        Wednesday = 2 => "wednesday",
        Thursday = 3 => "thursday",
        Friday = 4 => "friday",
        Saturday = 5 => "saturday",
        Sunday = 6 => "sunday",
        Unknown = 7 => "unknown",
        Other = 8 => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::WireEnum;

    #[test]
    fn sort_direction_tokens() {
        assert_eq!(SortDirection::Ascending.wire(), "asc");
        assert_eq!(SortDirection::Descending.wire(), "desc");
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
    }

    #[test]
    fn genre_lookup_by_id() {
        assert_eq!(AnimeGenre::from_raw(4), Some(AnimeGenre::Comedy));
        assert_eq!(MangaGenre::from_raw(45), Some(MangaGenre::Suspense));
        assert_eq!(AnimeGenre::from_raw(16), None);
        assert_eq!(AnimeGenre::from_raw(32), Some(AnimeGenre::Vampire));
    }

    #[test]
    fn ordinal_enums_use_declaration_positions() {
        for (position, member) in ClubCategory::ALL.iter().enumerate() {
            assert_eq!(member.raw(), position as i64);
        }
        assert_eq!(ScheduleDay::ALL.len(), 9);
    }

    #[test]
    fn display_is_the_wire_token() {
        assert_eq!(AgeRating::Pg13.to_string(), "pg13");
        assert_eq!(TopAnimeFilter::ByPopularity.to_string(), "bypopularity");
        assert_eq!(Season::Fall.to_string(), "fall");
    }
}
