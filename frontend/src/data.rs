use crate::models::Video;
use lazy_static::lazy_static;

fn catalog_video(
    id: &str,
    title: &str,
    description: &str,
    uploader: &str,
    views: &str,
    likes: &str,
    upload_date: &str,
    duration: &str,
) -> Video {
    Video {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        thumbnail: format!("/images/catalog/{id}.jpg"),
        uploader: uploader.to_string(),
        views: views.to_string(),
        likes: likes.to_string(),
        comments: "0".to_string(),
        upload_date: upload_date.to_string(),
        platform: "Vidion".to_string(),
        category: "Videos".to_string(),
        url: format!("/watch/{id}"),
        duration: duration.to_string(),
    }
}

lazy_static! {
    /// The built-in offline catalog the search page matches against
    /// before any remote source is consulted.
    pub static ref LOCAL_VIDEOS: Vec<Video> = vec![
        catalog_video(
            "1",
            "Big Buck Bunny",
            "A giant rabbit takes revenge on three rodents.",
            "Blender Foundation",
            "8,100,000",
            "120,000",
            "2008-05-30T00:00:00Z",
            "9:56",
        ),
        catalog_video(
            "2",
            "Sintel",
            "A lonely girl searches for the dragon she once raised.",
            "Blender Foundation",
            "6,400,000",
            "95,000",
            "2010-09-27T00:00:00Z",
            "14:48",
        ),
        catalog_video(
            "3",
            "Tears of Steel",
            "A group of warriors and scientists try to save the world from robots.",
            "Blender Foundation",
            "4,200,000",
            "61,000",
            "2012-09-26T00:00:00Z",
            "12:14",
        ),
        catalog_video(
            "4",
            "Spring",
            "A shepherd girl and her dog face ancient spirits on the mountain.",
            "Blender Studio",
            "1,900,000",
            "54,000",
            "2019-04-04T00:00:00Z",
            "7:44",
        ),
        catalog_video(
            "5",
            "Coffee Run",
            "A caffeinated sprint through past relationships.",
            "Blender Studio",
            "950,000",
            "31,000",
            "2020-05-29T00:00:00Z",
            "3:09",
        ),
        catalog_video(
            "6",
            "Charge",
            "In a world starved of energy, an outlaw chases one last battery.",
            "Blender Studio",
            "780,000",
            "27,000",
            "2022-12-15T00:00:00Z",
            "3:54",
        ),
    ];
}
